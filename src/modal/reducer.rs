//! Reducer for dialog instance state transitions.

use std::sync::Arc;

use crate::modal::intent::DialogEvent;
use crate::modal::outcome::{DialogOutcome, Payload, SelectedItem};
use crate::modal::request::{ActionRole, DialogKind, DialogRequest};
use crate::modal::state::{DialogState, SelectionState};
use crate::mvi::Reducer;

/// Reducer for dialog instances.
///
/// Terminal states absorb every event, so the first resolving event wins.
pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let (request, selection) = match state {
            DialogState::Open { request, selection } => (request, selection),
            terminal => return terminal,
        };

        match intent {
            DialogEvent::Teardown => DialogState::Aborted,

            DialogEvent::OutsideDismiss => {
                if request.is_dismissible() {
                    DialogState::Resolved(DialogOutcome::Dismissed)
                } else {
                    DialogState::Open { request, selection }
                }
            }

            DialogEvent::Action(role) if !request.kind().permits(role) => {
                DialogState::Open { request, selection }
            }
            DialogEvent::Action(ActionRole::Negative) => {
                DialogState::Resolved(DialogOutcome::Negative)
            }
            DialogEvent::Action(ActionRole::Neutral) => {
                DialogState::Resolved(DialogOutcome::Neutral)
            }
            DialogEvent::Action(ActionRole::Positive) => confirm(request, selection),

            DialogEvent::ItemPress(index) => press(request, selection, index),

            DialogEvent::ItemToggle(index) => {
                let selection = match selection {
                    SelectionState::Multi { mut checked } if index < request.items().len() => {
                        if !checked.remove(&index) {
                            checked.insert(index);
                        }
                        SelectionState::Multi { checked }
                    }
                    other => other,
                };
                DialogState::Open { request, selection }
            }

            DialogEvent::TextEdited(text) => {
                let selection = match selection {
                    SelectionState::Field { .. } => SelectionState::Field { text },
                    other => other,
                };
                DialogState::Open { request, selection }
            }
        }
    }
}

/// Positive button press.
fn confirm(request: Arc<DialogRequest>, selection: SelectionState) -> DialogState {
    let payload = match selection {
        SelectionState::Field { text } => Payload::Text(text),
        SelectionState::Single { current } => {
            match current.and_then(|index| selected(&request, index)) {
                Some(item) => Payload::Item(item),
                // Nothing picked yet: the dialog stays open.
                None => {
                    return DialogState::Open {
                        request,
                        selection: SelectionState::Single { current },
                    };
                }
            }
        }
        SelectionState::Multi { checked } => Payload::Items(
            checked
                .iter()
                .filter_map(|index| selected(&request, *index))
                .collect(),
        ),
        SelectionState::Empty => Payload::None,
    };
    DialogState::Resolved(DialogOutcome::Positive(payload))
}

/// Item press: replaces the single selection, or resolves a plain list.
fn press(request: Arc<DialogRequest>, selection: SelectionState, index: usize) -> DialogState {
    let Some(item) = selected(&request, index) else {
        return DialogState::Open { request, selection };
    };

    match (request.kind(), selection) {
        (DialogKind::PlainList, _) => {
            DialogState::Resolved(DialogOutcome::Positive(Payload::Item(item)))
        }
        (DialogKind::SingleSelectList, SelectionState::Single { .. }) => DialogState::Open {
            request,
            selection: SelectionState::Single {
                current: Some(index),
            },
        },
        (_, selection) => DialogState::Open { request, selection },
    }
}

fn selected(request: &DialogRequest, index: usize) -> Option<SelectedItem> {
    request
        .items()
        .get(index)
        .map(|label| SelectedItem::new(index, label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::request::TextFieldSpec;

    fn open(request: DialogRequest) -> DialogState {
        DialogState::open(Arc::new(request))
    }

    fn run(request: DialogRequest, events: Vec<DialogEvent>) -> DialogState {
        events
            .into_iter()
            .fold(open(request), DialogReducer::reduce)
    }

    #[test]
    fn alert_positive_has_no_payload() {
        let state = run(
            DialogRequest::alert("Saved", "All done"),
            vec![DialogEvent::Action(ActionRole::Positive)],
        );
        assert_eq!(
            state,
            DialogState::Resolved(DialogOutcome::Positive(Payload::None))
        );
    }

    #[test]
    fn alert_ignores_negative_press() {
        let state = run(
            DialogRequest::alert("Saved", "All done"),
            vec![DialogEvent::Action(ActionRole::Negative)],
        );
        assert!(state.is_open());
    }

    #[test]
    fn text_input_returns_field_text_verbatim() {
        let state = run(
            DialogRequest::text_input("Enter Name", TextFieldSpec::new("Your name", "")),
            vec![
                DialogEvent::TextEdited("  Ada ".into()),
                DialogEvent::Action(ActionRole::Positive),
            ],
        );
        assert_eq!(state.outcome().and_then(|o| o.text()), Some("  Ada "));
    }

    #[test]
    fn text_input_untouched_returns_prefill() {
        let state = run(
            DialogRequest::text_input("Rename", TextFieldSpec::new("", "draft.txt")),
            vec![DialogEvent::Action(ActionRole::Positive)],
        );
        assert_eq!(state.outcome().and_then(|o| o.text()), Some("draft.txt"));
    }

    #[test]
    fn single_select_press_replaces_current() {
        let state = run(
            DialogRequest::single_select("Pick", ["a", "b", "c"], Some(0)),
            vec![DialogEvent::ItemPress(2), DialogEvent::ItemPress(2)],
        );
        assert_eq!(
            state.selection(),
            Some(&SelectionState::Single { current: Some(2) })
        );
    }

    #[test]
    fn single_select_ignores_out_of_range_press() {
        let state = run(
            DialogRequest::single_select("Pick", ["a", "b"], Some(1)),
            vec![DialogEvent::ItemPress(7)],
        );
        assert_eq!(
            state.selection(),
            Some(&SelectionState::Single { current: Some(1) })
        );
    }

    #[test]
    fn multi_select_ignores_out_of_range_toggle() {
        let state = run(
            DialogRequest::multi_select("Pick", ["a"], [0]),
            vec![DialogEvent::ItemToggle(3)],
        );
        assert_eq!(
            state.selection(),
            Some(&SelectionState::Multi {
                checked: [0].into_iter().collect()
            })
        );
    }

    #[test]
    fn plain_list_resolves_on_first_press() {
        let state = run(
            DialogRequest::list("Share via", ["Mail", "Chat"]),
            vec![DialogEvent::ItemPress(1), DialogEvent::ItemPress(0)],
        );
        assert_eq!(
            state.outcome().and_then(|o| o.item()),
            Some(&SelectedItem::new(1, "Chat"))
        );
    }

    #[test]
    fn teardown_aborts_open_dialog() {
        let state = run(
            DialogRequest::confirm("t", "m"),
            vec![DialogEvent::Teardown],
        );
        assert_eq!(state, DialogState::Aborted);
    }

    #[test]
    fn aborted_absorbs_later_events() {
        let state = DialogReducer::reduce(
            DialogState::Aborted,
            DialogEvent::Action(ActionRole::Positive),
        );
        assert_eq!(state, DialogState::Aborted);
    }
}
