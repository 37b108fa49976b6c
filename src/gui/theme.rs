//! GUI theme: "Deep Orbit" - dark launcher palette.
//!
//! Color constants for the Meteor GUI.

use eframe::egui::Color32;

// Backgrounds

/// Window background: near-black blue
pub const BG_PRIMARY: Color32 = Color32::from_rgb(16, 18, 26);
/// Section frames
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 27, 38);
/// Status bar strip
pub const BG_STATUS: Color32 = Color32::from_rgb(21, 24, 33);

// Text

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(225, 228, 240);
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 165, 185);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(105, 110, 130);

// Accents

/// Section titles (a nod to the classic launcher's orange borders)
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(255, 160, 40);
pub const ACCENT_RED: Color32 = Color32::from_rgb(240, 90, 90);
