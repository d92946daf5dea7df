//! Events a presentation surface reports for a live dialog.

use crate::modal::request::ActionRole;
use crate::mvi::Intent;

/// One discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A button was pressed.
    Action(ActionRole),

    /// A list entry was pressed (single-select and plain lists).
    ItemPress(usize),

    /// A checkbox entry was toggled (multi-select lists).
    ItemToggle(usize),

    /// The text field now holds this text.
    TextEdited(String),

    /// Outside tap or back navigation.
    OutsideDismiss,

    /// The host destroyed the dialog without a user event.
    Teardown,
}

impl Intent for DialogEvent {}
