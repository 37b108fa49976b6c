//! GUI module for the launcher.
//!
//! The window is a single settings surface over the config store plus a
//! bottom status line. Every editor writes through to the store and the
//! store persists itself; there is no apply step anywhere.

pub mod app;
pub mod args_dialog;
pub mod runner;
pub mod settings;
pub mod status_bar;
pub mod theme;

pub use app::MeteorApp;
pub use runner::run_gui;
pub use status_bar::StatusLine;
