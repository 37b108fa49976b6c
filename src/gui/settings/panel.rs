//! The settings panel: claim bookkeeping, section ordering, and the
//! store-mutating operations behind the runtime-path and memory editors.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui::{self, RichText, ScrollArea};
use tracing::{debug, warn};

use crate::platform;

use super::fallback::{fallback_editors, render_fallback};
use super::helpers::{persist, section_frame};
use super::sections;
use super::state::SettingsCx;

/// A dedicated block of editors. Claim order decides render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Jvm,
    Launcher,
}

/// One settings surface, explicitly constructed and owned by the app.
#[derive(Debug)]
pub struct SettingsPanel {
    claimed: HashSet<String>,
    sections: Vec<Section>,

    /// Label on the runtime-path button: the override, or the autodetected
    /// runtime when the override is empty.
    pub(super) jre_label: String,
    /// Live slider position in MiB; hits the store only when the drag ends.
    pub(super) ram_mib: u32,
    pub(super) total_mem_mib: u32,
    pub(super) wrapper_buf: String,

    /// In-progress edits of fallback text fields, keyed by dotted path.
    text_buffers: HashMap<String, String>,
}

impl SettingsPanel {
    /// Build the panel, reading initial values for every dedicated editor.
    /// A key that is missing or mistyped fails construction.
    pub fn new(config: &crate::config::Config) -> Result<Self> {
        let jre = config
            .get_str("jre")
            .context("settings panel needs the `jre` key")?;
        let ram = config
            .get_i64("ram")
            .context("settings panel needs the `ram` key")?;
        let wrapper = config
            .get_str("wrapper")
            .context("settings panel needs the `wrapper` key")?;
        config
            .get_bool("data-sharing")
            .context("settings panel needs the `data-sharing` key")?;
        config
            .get_str("theme")
            .context("settings panel needs the `theme` key")?;
        config
            .get_str("language")
            .context("settings panel needs the `language` key")?;
        config
            .get_i64("max-threads")
            .context("settings panel needs the `max-threads` key")?;

        let jre_label = if jre.is_empty() {
            platform::default_runtime().display().to_string()
        } else {
            jre.to_string()
        };

        let mut panel = Self {
            claimed: HashSet::new(),
            sections: Vec::new(),
            jre_label,
            ram_mib: ram.max(0) as u32,
            total_mem_mib: platform::total_memory_mib() as u32,
            wrapper_buf: wrapper.to_string(),
            text_buffers: HashMap::new(),
        };

        panel.claim_section("jre", Section::Jvm);
        panel.claim("ram");
        panel.claim("vm-args");
        panel.claim("wrapper");

        panel.claim("game"); // edited on the version-select page
        panel.claim("javaagents"); // edited by the addon manager

        panel.claim_section("data-sharing", Section::Launcher);
        panel.claim("theme");
        panel.claim("language");
        panel.claim("max-threads");

        Ok(panel)
    }

    /// Mark a key as having a dedicated editor, keeping it out of the
    /// fallback section. Claiming twice is a logged anomaly, not an error.
    pub fn claim(&mut self, key: &str) {
        if self.claimed.insert(key.to_string()) {
            debug!("claimed {key}");
        } else {
            warn!("failed to claim {key}: already claimed");
        }
    }

    /// Claim a key and append its section to the layout. A duplicate claim
    /// still appends, so the section renders twice; the warning in `claim`
    /// is the only guard. Kept that way on purpose - see DESIGN.md.
    pub fn claim_section(&mut self, key: &str, section: Section) {
        self.claim(key);
        self.sections.push(section);
    }

    pub fn claimed(&self) -> &HashSet<String> {
        &self.claimed
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Commit a picked runtime executable: write its path into `jre`,
    /// refresh the button label, report to the status line. A cancelled
    /// picker (`None`) is a no-op.
    pub fn apply_runtime_selection(&mut self, cx: &mut SettingsCx<'_>, file: Option<PathBuf>) {
        let Some(file) = file else {
            return;
        };
        let path = file.display().to_string();
        cx.config.set("jre", path.clone());
        persist(cx);
        cx.status.set(cx.lang.format("gui.settings.jvm.jre.success", &path));
        self.jre_label = path;
    }

    /// Clear the runtime override after a confirmed prompt: `jre` goes back
    /// to empty (autodetect) and the label shows the detected runtime.
    /// A declined prompt leaves the store untouched.
    pub fn reset_runtime_override(&mut self, cx: &mut SettingsCx<'_>, confirmed: bool) {
        if !confirmed {
            return;
        }
        self.jre_label = platform::default_runtime().display().to_string();
        cx.config.set("jre", "");
        persist(cx);
        cx.status.set(cx.lang.get("gui.settings.jvm.jre.unset.success"));
    }

    /// Write the slider's final position into the store.
    pub fn commit_ram(&mut self, cx: &mut SettingsCx<'_>) {
        debug!("set ram -> {}", self.ram_mib);
        cx.config.set("ram", self.ram_mib);
        persist(cx);
    }

    /// Render the whole surface: restart note, dedicated sections in claim
    /// order, then the fallback section for everything unclaimed.
    pub fn show(&mut self, ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
        ui.label(
            RichText::new(cx.lang.get("gui.settings.warn.restart"))
                .small()
                .color(crate::gui::theme::TEXT_MUTED),
        );
        ui.add_space(8.0);

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for section in self.sections.clone() {
                match section {
                    Section::Jvm => sections::jvm::show(self, ui, cx),
                    Section::Launcher => sections::launcher::show(ui, cx),
                }
            }

            section_frame(ui, &cx.lang.get("gui.settings.unclaimed"), |ui| {
                let editors = fallback_editors(cx.config.root(), &self.claimed);
                render_fallback(ui, cx, &editors, &mut self.text_buffers);
            });
        });
    }
}
