//! eframe::App for the launcher window.

use anyhow::Result;
use eframe::egui::{self, RichText};

use crate::config::Config;
use crate::lang::Lang;

use super::args_dialog::ArgsDialog;
use super::settings::{SettingsCx, SettingsPanel};
use super::status_bar::{StatusLine, render_status_bar};
use super::theme::{BG_PRIMARY, TEXT_PRIMARY};

pub struct MeteorApp {
    config: Config,
    lang: Lang,
    panel: SettingsPanel,
    status: StatusLine,
    args_dialog: ArgsDialog,
}

impl MeteorApp {
    pub fn new(config: Config) -> Result<Self> {
        let lang = Lang::new(config.get_str("language").unwrap_or("en"));
        let panel = SettingsPanel::new(&config)?;
        Ok(Self {
            config,
            lang,
            panel,
            status: StatusLine::default(),
            args_dialog: ArgsDialog::new("vm-args"),
        })
    }
}

impl eframe::App for MeteorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Rebuild the string table when the language combo changed it
        let selected = self.config.get_str("language").unwrap_or("en");
        if selected != self.lang.code() {
            self.lang = Lang::new(selected);
        }

        let Self {
            config,
            lang,
            panel,
            status,
            args_dialog,
        } = self;

        render_status_bar(ctx, status);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BG_PRIMARY).inner_margin(14.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("⚙ {}", lang.get("gui.settings.title")))
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(10.0);

                let mut cx = SettingsCx {
                    config,
                    lang,
                    status,
                    args_dialog,
                };
                panel.show(ui, &mut cx);
            });

        args_dialog.show(ctx, config, lang);
    }
}
