//! State of one dialog instance.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::modal::outcome::DialogOutcome;
use crate::modal::request::{DialogBody, DialogKind, DialogRequest, InitialSelection};
use crate::mvi::UiState;

/// Transient selection held while a dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Message dialogs and plain lists.
    Empty,
    /// Current text field content.
    Field { text: String },
    /// Replaced wholesale on every item press.
    Single { current: Option<usize> },
    /// Flipped per entry on every toggle.
    Multi { checked: BTreeSet<usize> },
}

impl SelectionState {
    /// Seed the selection from the request.
    pub fn initial(request: &DialogRequest) -> Self {
        match (request.kind(), request.body(), request.initial_selection()) {
            (DialogKind::TextInput, DialogBody::TextField(field), _) => SelectionState::Field {
                text: field.prefill.clone(),
            },
            (DialogKind::SingleSelectList, _, InitialSelection::Index(index)) => {
                SelectionState::Single {
                    current: Some(*index),
                }
            }
            (DialogKind::SingleSelectList, _, _) => SelectionState::Single { current: None },
            (DialogKind::MultiSelectList, _, InitialSelection::Checked(checked)) => {
                SelectionState::Multi {
                    checked: checked.clone(),
                }
            }
            (DialogKind::MultiSelectList, _, _) => SelectionState::Multi {
                checked: BTreeSet::new(),
            },
            _ => SelectionState::Empty,
        }
    }
}

/// Lifecycle of a dialog instance: `Open` until exactly one terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Open {
        request: Arc<DialogRequest>,
        selection: SelectionState,
    },

    /// Terminal; carries the delivered outcome.
    Resolved(DialogOutcome),

    /// Terminal; torn down by the host without a user event.
    Aborted,
}

impl UiState for DialogState {}

impl DialogState {
    pub fn open(request: Arc<DialogRequest>) -> Self {
        let selection = SelectionState::initial(&request);
        DialogState::Open { request, selection }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_open()
    }

    pub fn outcome(&self) -> Option<&DialogOutcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        match self {
            Self::Open { selection, .. } => Some(selection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::request::TextFieldSpec;

    #[test]
    fn text_input_seeds_field_with_prefill() {
        let request = DialogRequest::text_input("Name", TextFieldSpec::new("hint", "Ada"));
        assert_eq!(
            SelectionState::initial(&request),
            SelectionState::Field { text: "Ada".into() }
        );
    }

    #[test]
    fn single_select_without_initial_has_no_current() {
        let request = DialogRequest::single_select("Pick", ["a", "b"], None);
        assert_eq!(
            SelectionState::initial(&request),
            SelectionState::Single { current: None }
        );
    }

    #[test]
    fn multi_select_seeds_checked_set() {
        let request = DialogRequest::multi_select("Pick", ["a", "b", "c"], [2, 0]);
        assert_eq!(
            SelectionState::initial(&request),
            SelectionState::Multi {
                checked: [0, 2].into_iter().collect()
            }
        );
    }

    #[test]
    fn open_state_is_not_terminal() {
        let state = DialogState::open(Arc::new(DialogRequest::alert("t", "m")));
        assert!(state.is_open());
        assert!(state.outcome().is_none());
        assert_eq!(state.selection(), Some(&SelectionState::Empty));
        assert!(DialogState::Aborted.is_terminal());
    }
}
