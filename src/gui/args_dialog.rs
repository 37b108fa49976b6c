//! VM-arguments dialog.
//!
//! Edits a string-array config key in a floating window. Like every other
//! editor, changes write through to the store immediately.

use eframe::egui::{self, RichText};
use serde_json::Value;

use crate::config::Config;
use crate::gui::theme::{ACCENT_RED, TEXT_MUTED};
use crate::lang::Lang;

/// Floating editor for one string-array key (the launcher uses it for
/// `vm-args`).
pub struct ArgsDialog {
    key: String,
    open: bool,
    /// Working copy of the array; written back as a whole on every change.
    entries: Vec<String>,
}

impl ArgsDialog {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            open: false,
            entries: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the window, snapshotting the current array. Entries that are not
    /// strings are dropped from the working copy.
    pub fn open(&mut self, config: &Config) {
        self.entries = config
            .get(&self.key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        self.open = true;
    }

    fn write_back(&self, config: &mut Config) {
        let items: Vec<Value> = self.entries.iter().cloned().map(Value::from).collect();
        config.set(&self.key, Value::Array(items));
        if let Err(e) = config.commit() {
            tracing::error!("failed to persist {}: {e:#}", self.key);
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &mut Config, lang: &Lang) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut dirty = false;
        let mut remove: Option<usize> = None;

        egui::Window::new(lang.get("gui.args.title"))
            .open(&mut open)
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                for (index, entry) in self.entries.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        let edit = egui::TextEdit::singleline(entry)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(260.0);
                        if ui.add(edit).lost_focus() {
                            dirty = true;
                        }
                        if ui
                            .button(RichText::new("✕").color(ACCENT_RED))
                            .on_hover_text(lang.get("gui.args.remove"))
                            .clicked()
                        {
                            remove = Some(index);
                        }
                    });
                }

                if self.entries.is_empty() {
                    ui.label(RichText::new("-").color(TEXT_MUTED));
                }

                ui.add_space(6.0);
                if ui.button(lang.get("gui.args.add")).clicked() {
                    self.entries.push(String::new());
                    dirty = true;
                }
            });

        if let Some(index) = remove {
            self.entries.remove(index);
            dirty = true;
        }
        if dirty {
            self.write_back(config);
        }
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config::new(PathBuf::from("/dev/null"), Config::default_root())
    }

    #[test]
    fn test_open_snapshots_string_entries() {
        let mut config = test_config();
        config.set("vm-args", json!(["-Xss4M", 42, "-DsomeFlag"]));

        let mut dialog = ArgsDialog::new("vm-args");
        dialog.open(&config);

        assert!(dialog.is_open());
        assert_eq!(dialog.entries, vec!["-Xss4M", "-DsomeFlag"]);
    }

    #[test]
    fn test_write_back_replaces_the_array() {
        let mut config = Config::new(
            std::env::temp_dir().join("meteor-args-test.json"),
            Config::default_root(),
        );
        let mut dialog = ArgsDialog::new("vm-args");
        dialog.open(&config);
        dialog.entries.push("-Xmx2G".to_string());
        dialog.write_back(&mut config);

        assert_eq!(config.get("vm-args"), Some(&json!(["-Xmx2G"])));
    }
}
