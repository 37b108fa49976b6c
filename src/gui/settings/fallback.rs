//! Generic editors for unclaimed config keys.
//!
//! Any top-level key no dedicated editor claimed still gets a widget,
//! derived from the value's runtime shape. The derivation is plain data so
//! it can be tested without a UI context; rendering consumes the derived
//! descriptors and reads live values from the store each frame.

use std::collections::{HashMap, HashSet};

use eframe::egui::{self, RichText};
use serde_json::{Map, Value};

use crate::gui::theme::ACCENT_ORANGE;

use super::helpers::{auto_save_checkbox, auto_save_number, auto_save_text, field_label};
use super::state::SettingsCx;

/// What kind of widget an unclaimed value gets.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorKind {
    /// Boolean: a toggle labeled with the raw key name
    Toggle,
    /// String: label plus free-text field, committed on submit/blur
    Text,
    /// Number: label plus unbounded drag value, committed on change
    Number,
    /// Nested object: a titled sub-section with the same treatment applied
    /// to its own keys
    Group(Vec<FallbackEditor>),
}

/// One derived editor: the key path from the root and the widget kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackEditor {
    pub path: Vec<String>,
    pub kind: EditorKind,
}

impl FallbackEditor {
    fn key(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

/// Derive one editor per unclaimed key. Arrays and nulls have no generic
/// editor and are skipped outright. The claim set is consulted at every
/// nesting level, so a nested key sharing its name with a claimed key is
/// skipped too (matches the panel's historical behavior).
pub fn fallback_editors(
    root: &Map<String, Value>,
    claimed: &HashSet<String>,
) -> Vec<FallbackEditor> {
    collect(root, claimed, &[])
}

fn collect(
    obj: &Map<String, Value>,
    claimed: &HashSet<String>,
    prefix: &[String],
) -> Vec<FallbackEditor> {
    let mut editors = Vec::new();
    for (key, value) in obj {
        if claimed.contains(key) {
            continue;
        }
        let mut path = prefix.to_vec();
        path.push(key.clone());
        let kind = match value {
            Value::Bool(_) => Some(EditorKind::Toggle),
            Value::String(_) => Some(EditorKind::Text),
            Value::Number(_) => Some(EditorKind::Number),
            Value::Object(inner) => Some(EditorKind::Group(collect(inner, claimed, &path))),
            Value::Array(_) | Value::Null => None,
        };
        if let Some(kind) = kind {
            editors.push(FallbackEditor { path, kind });
        }
    }
    editors
}

/// Render the derived editors. `buffers` carries in-progress text edits
/// across frames, keyed by the dotted path.
pub fn render_fallback(
    ui: &mut egui::Ui,
    cx: &mut SettingsCx<'_>,
    editors: &[FallbackEditor],
    buffers: &mut HashMap<String, String>,
) {
    for editor in editors {
        match &editor.kind {
            EditorKind::Toggle => {
                auto_save_checkbox(ui, cx, &editor.path, editor.key());
            }
            EditorKind::Text => {
                ui.horizontal(|ui| {
                    field_label(ui, editor.key());
                    let initial = cx
                        .config
                        .get_path(&editor.path)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    let buffer = buffers.entry(editor.path.join(".")).or_insert(initial);
                    auto_save_text(ui, cx, &editor.path, buffer, 220.0);
                });
            }
            EditorKind::Number => {
                ui.horizontal(|ui| {
                    field_label(ui, editor.key());
                    auto_save_number(ui, cx, &editor.path);
                });
            }
            EditorKind::Group(children) => {
                ui.add_space(4.0);
                ui.label(RichText::new(editor.key()).monospace().color(ACCENT_ORANGE));
                ui.indent(editor.path.join("."), |ui| {
                    render_fallback(ui, cx, children, buffers);
                });
            }
        }
        ui.add_space(2.0);
    }
}
