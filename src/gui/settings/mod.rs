//! Settings surface.
//!
//! Renders dedicated editors for the launcher keys it knows about and a
//! generic fallback editor for every other primitive key in the store.
//! Which keys are "known" is tracked by the claim set; see
//! [`panel::SettingsPanel::claim`].

mod fallback;
mod helpers;
mod panel;
mod sections;
mod state;

pub use fallback::{EditorKind, FallbackEditor, fallback_editors};
pub use panel::{Section, SettingsPanel};
pub use state::SettingsCx;
