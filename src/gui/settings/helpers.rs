//! Auto-save widget helpers.
//!
//! Every widget here follows the same contract: read the current value from
//! the store, render, and on a committing interaction write the new value
//! back and persist through `Config::commit`.

use eframe::egui::{self, RichText};
use serde_json::Value;

use crate::gui::theme::{ACCENT_ORANGE, BG_SECONDARY, TEXT_MUTED};

use super::state::SettingsCx;

/// Persist the store, routing a failure to the status line. Editors call
/// this after every write; the save policy itself lives in `Config::commit`.
pub fn persist(cx: &mut SettingsCx<'_>) {
    if let Err(e) = cx.config.commit() {
        tracing::error!("failed to persist config: {e:#}");
        cx.status.set_error(format!("Failed to save settings: {e:#}"));
    }
}

/// Decide whether a slider interaction commits. Intermediate drag ticks must
/// not write; the value lands when the drag ends, or when it changed without
/// a drag at all (track click, keyboard).
pub fn slider_commit(changed: bool, dragged: bool, drag_stopped: bool) -> bool {
    drag_stopped || (changed && !dragged)
}

/// Titled section frame in the launcher's house style.
pub fn section_frame<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.label(RichText::new(title).monospace().color(ACCENT_ORANGE));
    let inner = egui::Frame::new()
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(10.0)
        .show(ui, add_contents)
        .inner;
    ui.add_space(10.0);
    inner
}

/// Checkbox bound to a (possibly nested) boolean key; writes on every toggle.
pub fn auto_save_checkbox(ui: &mut egui::Ui, cx: &mut SettingsCx<'_>, path: &[String], label: &str) {
    let Some(mut checked) = cx.config.get_path(path).and_then(Value::as_bool) else {
        return;
    };
    if ui.checkbox(&mut checked, label).changed() {
        cx.config.set_path(path, checked);
        persist(cx);
    }
}

/// Text field bound to a (possibly nested) string key. `buffer` holds the
/// in-progress edit; the store is written on enter or focus loss so clicking
/// away never drops an edit.
pub fn auto_save_text(
    ui: &mut egui::Ui,
    cx: &mut SettingsCx<'_>,
    path: &[String],
    buffer: &mut String,
    width: f32,
) {
    let edit = egui::TextEdit::singleline(buffer)
        .font(egui::TextStyle::Monospace)
        .desired_width(width);
    if ui.add(edit).lost_focus() {
        cx.config.set_path(path, buffer.clone());
        persist(cx);
    }
}

/// Unbounded numeric drag value bound to a (possibly nested) number key;
/// writes on every change. Integer-valued keys stay integers in the file.
pub fn auto_save_number(ui: &mut egui::Ui, cx: &mut SettingsCx<'_>, path: &[String]) {
    let Some(current) = cx.config.get_path(path) else {
        return;
    };
    let was_integer = current.is_i64() || current.is_u64();
    let Some(mut value) = current.as_f64() else {
        return;
    };
    if ui.add(egui::DragValue::new(&mut value)).changed() {
        if was_integer {
            cx.config.set_path(path, value.round() as i64);
        } else {
            cx.config.set_path(path, value);
        }
        persist(cx);
    }
}

/// Integer drag value bound to a top-level key, clamped to an inclusive
/// range; writes on every change.
pub fn auto_save_drag_int(
    ui: &mut egui::Ui,
    cx: &mut SettingsCx<'_>,
    key: &str,
    min: i64,
    max: i64,
) {
    let Some(mut value) = cx.config.get(key).and_then(Value::as_i64) else {
        return;
    };
    if ui
        .add(egui::DragValue::new(&mut value).range(min..=max))
        .changed()
    {
        cx.config.set(key, value.clamp(min, max));
        persist(cx);
    }
}

/// Combo box over a fixed candidate list bound to a top-level string key;
/// a selection writes immediately.
pub fn auto_save_combo(ui: &mut egui::Ui, cx: &mut SettingsCx<'_>, key: &str, items: &[&str]) {
    let current = cx
        .config
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    egui::ComboBox::from_id_salt(key)
        .selected_text(current.clone())
        .show_ui(ui, |ui| {
            for item in items {
                if ui.selectable_label(current == *item, *item).clicked() {
                    cx.config.set(key, *item);
                    persist(cx);
                }
            }
        });
}

/// Dim field label.
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED));
}

/// Make a nested-key path from string segments.
pub fn key_path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intermediate_drag_ticks_do_not_commit() {
        assert!(!slider_commit(true, true, false));
    }

    #[test]
    fn test_drag_release_commits() {
        assert!(slider_commit(false, false, true));
    }

    #[test]
    fn test_click_without_drag_commits() {
        assert!(slider_commit(true, false, false));
    }

    #[test]
    fn test_idle_frame_does_not_commit() {
        assert!(!slider_commit(false, false, false));
    }
}
