//! Configuration file I/O.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use fs2::FileExt;
use serde_json::{Map, Value};

use super::Config;

impl Config {
    /// Load the config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let root: Map<String, Value> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Self::new(path.to_path_buf(), root))
    }

    /// Load the config, writing a default file first when none exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("no config at {}, writing defaults", path.display());
            let config = Self::new(path.to_path_buf(), Self::default_root());
            config.save()?;
            return Ok(config);
        }
        Self::load(path)
    }

    /// Persist the config with an exclusive lock and an atomic write:
    /// 1. The lock keeps concurrent launcher instances from interleaving
    /// 2. Temp file + rename prevents corruption on crash
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self.root()).context("Failed to serialize config")?;

        // Lock file is separate from the config so the rename below does not
        // invalidate the held lock
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .context("Failed to acquire config lock")?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write config content")?;
        temp_file.sync_all().context("Failed to sync config file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename config file: {}", self.path.display()))?;

        // Lock releases when lock_file drops
        Ok(())
    }

    /// The single persistence entry point every editor goes through. Keeping
    /// the policy here means changing "save immediately" to something else is
    /// a one-line change.
    pub fn commit(&self) -> Result<()> {
        self.save()
    }
}

/// Write a default config file, refusing to clobber an existing one unless
/// `force` is set. Returns the path written.
pub fn init_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    let config = Config::new(path.to_path_buf(), Config::default_root());
    config.save()?;
    Ok(path.to_path_buf())
}
