//! Meteor - a lightweight game launcher.
//!
//! The launcher keeps its state in a single JSON config file. The settings
//! surface binds widgets straight to keys of that file and persists every
//! committed edit on the spot - there is no apply button. Keys the panel
//! does not know about still get an editor: a generic one derived from the
//! value's runtime shape.

pub mod config;
pub mod gui;
pub mod lang;
pub mod platform;

pub use config::Config;
pub use lang::Lang;
