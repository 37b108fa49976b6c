//! Bottom status line.
//!
//! The settings panel reports outcomes of runtime-path actions here; other
//! launcher pages share the same sink.

use eframe::egui::{self, RichText};

use super::theme::{ACCENT_RED, BG_STATUS, TEXT_DIM, TEXT_MUTED};

/// One-line message sink shown at the bottom of the window.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: String,
    is_error: bool,
}

impl StatusLine {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Render the bottom status bar.
pub fn render_status_bar(ctx: &egui::Context, status: &StatusLine) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::new().fill(BG_STATUS).inner_margin(6.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if status.text().is_empty() {
                    ui.label(
                        RichText::new(concat!("meteor ", env!("CARGO_PKG_VERSION")))
                            .small()
                            .monospace()
                            .color(TEXT_MUTED),
                    );
                } else {
                    let color = if status.is_error() { ACCENT_RED } else { TEXT_DIM };
                    ui.label(RichText::new(status.text()).small().color(color));
                }
            });
        });
}
