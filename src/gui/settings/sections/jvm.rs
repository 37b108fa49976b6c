//! Java runtime section: runtime path override, memory slider, wrapper
//! command, and the VM-args dialog trigger.

use eframe::egui;
use rfd::MessageDialogResult;

use super::super::helpers::{auto_save_text, field_label, key_path, section_frame, slider_commit};
use super::super::panel::SettingsPanel;
use super::super::state::SettingsCx;

pub fn show(panel: &mut SettingsPanel, ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
    section_frame(ui, &cx.lang.get("gui.settings.jvm"), |ui| {
        runtime_row(panel, ui, cx);
        ui.add_space(6.0);
        memory_row(panel, ui, cx);
        ui.add_space(6.0);
        wrapper_row(panel, ui, cx);
        ui.add_space(6.0);
        if ui.button(cx.lang.get("gui.settings.jvm.args")).clicked() {
            cx.args_dialog.open(cx.config);
        }
    });
}

/// Runtime path button plus the reset-to-autodetect button. The picker and
/// the confirmation prompt are synchronous native dialogs.
fn runtime_row(panel: &mut SettingsPanel, ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
    ui.horizontal(|ui| {
        field_label(ui, &cx.lang.get("gui.settings.jvm.jre"));

        if ui.button(panel.jre_label.as_str()).clicked() {
            let mut dialog = rfd::FileDialog::new();
            if cfg!(windows) {
                dialog = dialog.add_filter(cx.lang.get("gui.settings.jvm.jre.filter"), &["exe"]);
            }
            panel.apply_runtime_selection(cx, dialog.pick_file());
        }

        if ui.button(cx.lang.get("gui.settings.jvm.jre.unset")).clicked() {
            let confirmed = rfd::MessageDialog::new()
                .set_title("Confirm")
                .set_description(cx.lang.get("gui.settings.jvm.jre.unset.confirm"))
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                == MessageDialogResult::Yes;
            panel.reset_runtime_override(cx, confirmed);
        }
    });
}

/// Memory slider over 0..=total physical MiB. The label tracks every tick;
/// the store is only written when the drag ends.
fn memory_row(panel: &mut SettingsPanel, ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
    ui.horizontal(|ui| {
        field_label(ui, &cx.lang.get("gui.settings.jvm.ram"));

        let total = panel.total_mem_mib;
        let response = ui.add(
            egui::Slider::new(&mut panel.ram_mib, 0..=total)
                .show_value(false)
                .step_by(256.0),
        );
        ui.label(format!("{:.2} GiB", f64::from(panel.ram_mib) / 1024.0));

        if slider_commit(
            response.changed(),
            response.dragged(),
            response.drag_stopped(),
        ) {
            panel.commit_ram(cx);
        }
    });
}

fn wrapper_row(panel: &mut SettingsPanel, ui: &mut egui::Ui, cx: &mut SettingsCx<'_>) {
    ui.horizontal(|ui| {
        field_label(ui, &cx.lang.get("gui.settings.jvm.wrapper"));
        auto_save_text(ui, cx, &key_path(&["wrapper"]), &mut panel.wrapper_buf, 260.0);
    });
}
