//! Borrowed context threaded through settings rendering.

use crate::config::Config;
use crate::gui::args_dialog::ArgsDialog;
use crate::gui::status_bar::StatusLine;
use crate::lang::Lang;

/// Everything the settings editors need besides their own widget state:
/// the store they write through, the label table, the status sink, and the
/// VM-args dialog they can pop open.
pub struct SettingsCx<'a> {
    pub config: &'a mut Config,
    pub lang: &'a Lang,
    pub status: &'a mut StatusLine,
    pub args_dialog: &'a mut ArgsDialog,
}
