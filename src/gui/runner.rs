//! GUI runner - loads the config and opens the launcher window.

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::MeteorApp;
use crate::config::Config;

/// Run the launcher GUI against the config at `config_path`, writing a
/// default file first when none exists.
pub fn run_gui(config_path: PathBuf) -> Result<()> {
    let config = Config::load_or_default(&config_path)?;
    info!("loaded config from {}", config_path.display());

    let app = MeteorApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([560.0, 400.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native("meteor", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
