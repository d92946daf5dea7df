//! Widget-side state of a dialog on the terminal, and key handling.
//!
//! The view mirrors what a native dialog widget keeps on its own (cursor
//! positions, the radio mark, check marks, the edited text) and turns key
//! presses into [`DialogEvent`]s. Outcomes are decided by the reducer, not
//! here.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::modal::{
    ActionRole, DialogBody, DialogEvent, DialogKind, DialogRequest, InitialSelection, InputClass,
};

/// Visible rows of a list before it scrolls.
pub const MAX_VISIBLE_ROWS: usize = 8;

#[derive(Debug, Clone)]
pub struct DialogView {
    request: DialogRequest,
    text: String,
    /// Cursor in the text field, in chars.
    text_cursor: usize,
    list_cursor: usize,
    current: Option<usize>,
    checked: BTreeSet<usize>,
    /// Index into the request's action slots.
    button: usize,
}

impl DialogView {
    pub fn new(request: DialogRequest) -> Self {
        let (text, text_cursor) = match request.body() {
            DialogBody::TextField(field) => (field.prefill.clone(), field.cursor()),
            _ => (String::new(), 0),
        };
        let (current, checked) = match request.initial_selection() {
            InitialSelection::Index(index) => (Some(*index), BTreeSet::new()),
            InitialSelection::Checked(checked) => (None, checked.clone()),
            InitialSelection::None => (None, BTreeSet::new()),
        };

        Self {
            text,
            text_cursor,
            list_cursor: current.unwrap_or(0),
            current,
            checked,
            button: 0,
            request,
        }
    }

    pub fn request(&self) -> &DialogRequest {
        &self.request
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Field text as drawn: masked for passwords.
    pub fn display_text(&self) -> String {
        match self.request.body() {
            DialogBody::TextField(field) if field.input_class == InputClass::Password => {
                "•".repeat(self.text.chars().count())
            }
            _ => self.text.clone(),
        }
    }

    pub fn text_cursor(&self) -> usize {
        self.text_cursor
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn focused_button(&self) -> usize {
        self.button
    }

    /// First visible list row so that the cursor stays on screen.
    pub fn scroll_offset(&self) -> usize {
        (self.list_cursor + 1).saturating_sub(MAX_VISIBLE_ROWS)
    }

    /// Apply a key press; returns the event to report, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(DialogEvent::OutsideDismiss),
            KeyCode::Tab => {
                self.move_button(1);
                return None;
            }
            KeyCode::BackTab => {
                self.move_button(-1);
                return None;
            }
            KeyCode::Enter => return self.enter(),
            _ => {}
        }

        match self.request.kind() {
            DialogKind::TextInput => self.edit(key),
            kind if kind.is_list() => self.navigate_list(key),
            _ => {
                match key.code {
                    KeyCode::Left => self.move_button(-1),
                    KeyCode::Right => self.move_button(1),
                    _ => {}
                }
                None
            }
        }
    }

    fn enter(&mut self) -> Option<DialogEvent> {
        if self.request.kind() == DialogKind::PlainList {
            return Some(DialogEvent::ItemPress(self.list_cursor));
        }
        self.request
            .actions()
            .get(self.button)
            .map(|slot| DialogEvent::Action(slot.role))
    }

    fn move_button(&mut self, delta: isize) {
        let count = self.request.actions().len();
        if count == 0 {
            return;
        }
        self.button = (self.button as isize + delta).rem_euclid(count as isize) as usize;
    }

    fn navigate_list(&mut self, key: KeyEvent) -> Option<DialogEvent> {
        let len = self.request.items().len();
        if len == 0 {
            return None;
        }

        match key.code {
            KeyCode::Up => {
                self.list_cursor = if self.list_cursor == 0 {
                    len - 1
                } else {
                    self.list_cursor - 1
                };
                None
            }
            KeyCode::Down => {
                self.list_cursor = if self.list_cursor + 1 >= len {
                    0
                } else {
                    self.list_cursor + 1
                };
                None
            }
            KeyCode::Left => {
                self.move_button(-1);
                None
            }
            KeyCode::Right => {
                self.move_button(1);
                None
            }
            KeyCode::Char(' ') => match self.request.kind() {
                DialogKind::MultiSelectList => {
                    if !self.checked.remove(&self.list_cursor) {
                        self.checked.insert(self.list_cursor);
                    }
                    Some(DialogEvent::ItemToggle(self.list_cursor))
                }
                _ => {
                    self.current = Some(self.list_cursor);
                    Some(DialogEvent::ItemPress(self.list_cursor))
                }
            },
            _ => None,
        }
    }

    fn edit(&mut self, key: KeyEvent) -> Option<DialogEvent> {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_offset(self.text_cursor);
                self.text.insert(at, ch);
                self.text_cursor += 1;
            }
            KeyCode::Backspace if self.text_cursor > 0 => {
                let at = self.byte_offset(self.text_cursor - 1);
                self.text.remove(at);
                self.text_cursor -= 1;
            }
            KeyCode::Delete if self.text_cursor < self.text.chars().count() => {
                let at = self.byte_offset(self.text_cursor);
                self.text.remove(at);
            }
            KeyCode::Left => {
                self.text_cursor = self.text_cursor.saturating_sub(1);
                return None;
            }
            KeyCode::Right => {
                self.text_cursor = (self.text_cursor + 1).min(self.text.chars().count());
                return None;
            }
            KeyCode::Home => {
                self.text_cursor = 0;
                return None;
            }
            KeyCode::End => {
                self.text_cursor = self.text.chars().count();
                return None;
            }
            KeyCode::Up | KeyCode::Down => {
                self.move_button(if key.code == KeyCode::Up { -1 } else { 1 });
                return None;
            }
            _ => return None,
        }
        Some(DialogEvent::TextEdited(self.text.clone()))
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    /// Role of the focused button, if the kind has buttons.
    pub fn focused_role(&self) -> Option<ActionRole> {
        self.request.actions().get(self.button).map(|slot| slot.role)
    }
}

/// Spinner state of a loading indicator.
#[derive(Debug, Clone)]
pub struct LoadingView {
    pub message: String,
    pub cancelable: bool,
    pub tick: u8,
}

impl LoadingView {
    pub fn new(message: impl Into<String>, cancelable: bool) -> Self {
        Self {
            message: message.into(),
            cancelable,
            tick: 0,
        }
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogEvent> {
        if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc && self.cancelable {
            Some(DialogEvent::OutsideDismiss)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::TextFieldSpec;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_reports_full_text() {
        let mut view =
            DialogView::new(DialogRequest::text_input("Name", TextFieldSpec::new("", "Ad")));
        assert_eq!(view.text_cursor(), 2);
        assert_eq!(
            view.handle_key(press(KeyCode::Char('a'))),
            Some(DialogEvent::TextEdited("Ada".into()))
        );
        assert_eq!(
            view.handle_key(press(KeyCode::Backspace)),
            Some(DialogEvent::TextEdited("Ad".into()))
        );
    }

    #[test]
    fn editing_respects_cursor_position() {
        let mut view =
            DialogView::new(DialogRequest::text_input("Name", TextFieldSpec::new("", "ac")));
        view.handle_key(press(KeyCode::Left));
        assert_eq!(
            view.handle_key(press(KeyCode::Char('b'))),
            Some(DialogEvent::TextEdited("abc".into()))
        );
        view.handle_key(press(KeyCode::Home));
        assert_eq!(
            view.handle_key(press(KeyCode::Delete)),
            Some(DialogEvent::TextEdited("bc".into()))
        );
    }

    #[test]
    fn password_is_masked() {
        let field = TextFieldSpec::new("", "secret").with_input_class(InputClass::Password);
        let view = DialogView::new(DialogRequest::text_input("Password", field));
        assert_eq!(view.display_text(), "••••••");
        assert_eq!(view.text(), "secret");
    }

    #[test]
    fn enter_presses_focused_button() {
        let mut view = DialogView::new(DialogRequest::three_choice(
            "Unsaved", "Save?", "Save", "Discard", "Cancel",
        ));
        assert_eq!(
            view.handle_key(press(KeyCode::Enter)),
            Some(DialogEvent::Action(ActionRole::Positive))
        );
        view.handle_key(press(KeyCode::Tab));
        view.handle_key(press(KeyCode::Tab));
        assert_eq!(view.focused_role(), Some(ActionRole::Neutral));
        view.handle_key(press(KeyCode::Tab));
        assert_eq!(view.focused_role(), Some(ActionRole::Positive));
    }

    #[test]
    fn space_toggles_multi_select_entry() {
        let mut view = DialogView::new(DialogRequest::multi_select(
            "Pick",
            ["A", "B", "C"],
            Vec::<usize>::new(),
        ));
        view.handle_key(press(KeyCode::Down));
        assert_eq!(
            view.handle_key(press(KeyCode::Char(' '))),
            Some(DialogEvent::ItemToggle(1))
        );
        assert!(view.is_checked(1));
        view.handle_key(press(KeyCode::Char(' ')));
        assert!(!view.is_checked(1));
    }

    #[test]
    fn list_cursor_wraps() {
        let mut view = DialogView::new(DialogRequest::single_select("Pick", ["A", "B"], None));
        view.handle_key(press(KeyCode::Up));
        assert_eq!(view.list_cursor(), 1);
        assert_eq!(
            view.handle_key(press(KeyCode::Char(' '))),
            Some(DialogEvent::ItemPress(1))
        );
        assert!(view.is_current(1));
    }

    #[test]
    fn enter_on_plain_list_presses_item() {
        let mut view = DialogView::new(DialogRequest::list("Share via", ["Mail", "Chat"]));
        view.handle_key(press(KeyCode::Down));
        assert_eq!(
            view.handle_key(press(KeyCode::Enter)),
            Some(DialogEvent::ItemPress(1))
        );
    }

    #[test]
    fn escape_reports_outside_dismiss() {
        let mut view = DialogView::new(DialogRequest::alert("t", "m").dismissible(false));
        assert_eq!(
            view.handle_key(press(KeyCode::Esc)),
            Some(DialogEvent::OutsideDismiss)
        );
    }

    #[test]
    fn loading_escape_only_when_cancelable() {
        assert_eq!(LoadingView::new("Loading...", false).handle_key(press(KeyCode::Esc)), None);
        assert_eq!(
            LoadingView::new("Loading...", true).handle_key(press(KeyCode::Esc)),
            Some(DialogEvent::OutsideDismiss)
        );
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        let items: Vec<String> = (0..20).map(|i| format!("Item {}", i)).collect();
        let mut view = DialogView::new(DialogRequest::single_select("Pick", items, Some(12)));
        assert_eq!(view.scroll_offset(), 12 + 1 - MAX_VISIBLE_ROWS);
        view.handle_key(press(KeyCode::Down));
        assert_eq!(view.list_cursor(), 13);
    }
}
