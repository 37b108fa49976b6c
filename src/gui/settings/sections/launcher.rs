//! Launcher section: telemetry opt-in, theme, language, download threads.

use eframe::egui;

use super::super::helpers::{
    auto_save_checkbox, auto_save_combo, auto_save_drag_int, field_label, key_path, section_frame,
};
use super::super::state::SettingsCx;
use crate::lang;

/// Shipped theme names.
const THEMES: &[&str] = &["dark", "light"];

/// Download threads are clamped to this inclusive range.
const MAX_THREADS_RANGE: (i64, i64) = (1, 256);

pub fn show(ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
    section_frame(ui, &cx.lang.get("gui.settings.launcher"), |ui| {
        let data_sharing_label = cx.lang.get("gui.settings.launcher.data-sharing");
        auto_save_checkbox(ui, cx, &key_path(&["data-sharing"]), &data_sharing_label);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            field_label(ui, &cx.lang.get("gui.settings.launcher.theme"));
            auto_save_combo(ui, cx, "theme", THEMES);
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            field_label(ui, &cx.lang.get("gui.settings.launcher.language"));
            auto_save_combo(ui, cx, "language", lang::LANGUAGES);
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            field_label(ui, &cx.lang.get("gui.settings.launcher.max-threads"));
            auto_save_drag_int(ui, cx, "max-threads", MAX_THREADS_RANGE.0, MAX_THREADS_RANGE.1);
        });
    });
}
