//! Dialog requests: the immutable configuration a caller submits.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::ButtonLabels;
use crate::error::DialogError;

/// Which dialog is shown. Determines the body widget and the action slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Alert,
    Confirm,
    ThreeChoice,
    TextInput,
    SingleSelectList,
    MultiSelectList,
    /// List without a confirm step: the first item press resolves it.
    PlainList,
}

/// Role of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRole {
    Positive,
    Negative,
    Neutral,
}

impl DialogKind {
    /// Action slots owned by this kind, in button order.
    pub fn roles(self) -> &'static [ActionRole] {
        use ActionRole::*;
        match self {
            DialogKind::Alert => &[Positive],
            DialogKind::ThreeChoice => &[Positive, Negative, Neutral],
            DialogKind::Confirm
            | DialogKind::TextInput
            | DialogKind::SingleSelectList
            | DialogKind::MultiSelectList => &[Positive, Negative],
            DialogKind::PlainList => &[],
        }
    }

    pub fn permits(self, role: ActionRole) -> bool {
        self.roles().contains(&role)
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            DialogKind::SingleSelectList | DialogKind::MultiSelectList | DialogKind::PlainList
        )
    }
}

/// One labelled button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSlot {
    pub role: ActionRole,
    pub label: String,
}

/// Keyboard/input class hint for a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputClass {
    #[default]
    Text,
    Number,
    Phone,
    Email,
    Url,
    Password,
}

/// Single-line text field shown by [`DialogKind::TextInput`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldSpec {
    /// Shown while the field is empty.
    pub hint: String,
    /// Initial field content.
    pub prefill: String,
    pub input_class: InputClass,
}

impl TextFieldSpec {
    pub fn new(hint: impl Into<String>, prefill: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            prefill: prefill.into(),
            input_class: InputClass::Text,
        }
    }

    pub fn with_input_class(mut self, input_class: InputClass) -> Self {
        self.input_class = input_class;
        self
    }

    /// Initial cursor position (in chars): the end of the prefill.
    pub fn cursor(&self) -> usize {
        self.prefill.chars().count()
    }
}

/// Body widget of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogBody {
    Message(String),
    TextField(TextFieldSpec),
    Items(Vec<String>),
}

/// Selection a list dialog opens with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InitialSelection {
    #[default]
    None,
    /// Pre-selected entry of a single-select list.
    Index(usize),
    /// Pre-checked entries of a multi-select list.
    Checked(BTreeSet<usize>),
}

/// Immutable configuration for one modal interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    kind: DialogKind,
    title: String,
    body: DialogBody,
    actions: Vec<ActionSlot>,
    initial: InitialSelection,
    dismissible: bool,
}

impl DialogRequest {
    fn new(kind: DialogKind, title: impl Into<String>, body: DialogBody) -> Self {
        let labels = ButtonLabels::default();
        let request = Self {
            kind,
            title: title.into(),
            body,
            actions: Vec::new(),
            initial: InitialSelection::None,
            dismissible: true,
        };
        request.with_labels(&labels)
    }

    /// Message with a single "OK" button.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Alert, title, DialogBody::Message(message.into()))
    }

    /// Message with "Yes" / "No" buttons.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Confirm, title, DialogBody::Message(message.into()))
    }

    /// Message with three explicitly labelled buttons.
    pub fn three_choice(
        title: impl Into<String>,
        message: impl Into<String>,
        positive: impl Into<String>,
        negative: impl Into<String>,
        neutral: impl Into<String>,
    ) -> Self {
        Self::new(
            DialogKind::ThreeChoice,
            title,
            DialogBody::Message(message.into()),
        )
        .with_action(ActionRole::Positive, positive)
        .with_action(ActionRole::Negative, negative)
        .with_action(ActionRole::Neutral, neutral)
    }

    pub fn text_input(title: impl Into<String>, field: TextFieldSpec) -> Self {
        Self::new(DialogKind::TextInput, title, DialogBody::TextField(field))
    }

    /// Radio list; `selected` of `None` forces the user to pick something.
    pub fn single_select<I, T>(title: impl Into<String>, items: I, selected: Option<usize>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut request = Self::new(
            DialogKind::SingleSelectList,
            title,
            DialogBody::Items(items.into_iter().map(Into::into).collect()),
        );
        if let Some(index) = selected {
            request.initial = InitialSelection::Index(index);
        }
        request
    }

    /// Checkbox list with the given entries pre-checked.
    pub fn multi_select<I, T, C>(title: impl Into<String>, items: I, checked: C) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        C: IntoIterator<Item = usize>,
    {
        let mut request = Self::new(
            DialogKind::MultiSelectList,
            title,
            DialogBody::Items(items.into_iter().map(Into::into).collect()),
        );
        let checked: BTreeSet<usize> = checked.into_iter().collect();
        if !checked.is_empty() {
            request.initial = InitialSelection::Checked(checked);
        }
        request
    }

    /// List that resolves on the first item press.
    pub fn list<I, T>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            DialogKind::PlainList,
            title,
            DialogBody::Items(items.into_iter().map(Into::into).collect()),
        )
    }

    /// Add a slot or relabel an existing one.
    ///
    /// Adding a role the kind has no slot for is accepted here and rejected
    /// by [`DialogRequest::validate`].
    pub fn with_action(mut self, role: ActionRole, label: impl Into<String>) -> Self {
        let label = label.into();
        match self.actions.iter_mut().find(|slot| slot.role == role) {
            Some(slot) => slot.label = label,
            None => {
                self.actions.push(ActionSlot { role, label });
                self.actions.sort_by_key(|slot| slot.role);
            }
        }
        self
    }

    /// Apply default button labels to the slots this kind owns.
    ///
    /// Three-choice dialogs carry caller-chosen labels and are left alone.
    pub fn with_labels(self, labels: &ButtonLabels) -> Self {
        match self.kind {
            DialogKind::Alert => self.with_action(ActionRole::Positive, labels.ok.clone()),
            DialogKind::Confirm => self
                .with_action(ActionRole::Positive, labels.yes.clone())
                .with_action(ActionRole::Negative, labels.no.clone()),
            DialogKind::TextInput
            | DialogKind::SingleSelectList
            | DialogKind::MultiSelectList => self
                .with_action(ActionRole::Positive, labels.ok.clone())
                .with_action(ActionRole::Negative, labels.cancel.clone()),
            DialogKind::ThreeChoice | DialogKind::PlainList => self,
        }
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &DialogBody {
        &self.body
    }

    pub fn actions(&self) -> &[ActionSlot] {
        &self.actions
    }

    pub fn label(&self, role: ActionRole) -> Option<&str> {
        self.actions
            .iter()
            .find(|slot| slot.role == role)
            .map(|slot| slot.label.as_str())
    }

    pub fn initial_selection(&self) -> &InitialSelection {
        &self.initial
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Items of a list body; empty for other bodies.
    pub fn items(&self) -> &[String] {
        match &self.body {
            DialogBody::Items(items) => items,
            _ => &[],
        }
    }

    /// Check the request against its kind before anything is shown.
    pub fn validate(&self) -> Result<(), DialogError> {
        if self.title.trim().is_empty() {
            return Err(DialogError::invalid("title must not be empty"));
        }

        let body_fits = match (&self.body, self.kind) {
            (
                DialogBody::Message(_),
                DialogKind::Alert | DialogKind::Confirm | DialogKind::ThreeChoice,
            ) => true,
            (DialogBody::TextField(_), DialogKind::TextInput) => true,
            (DialogBody::Items(_), kind) => kind.is_list(),
            _ => false,
        };
        if !body_fits {
            return Err(DialogError::invalid(format!(
                "{:?} dialogs cannot show this body",
                self.kind
            )));
        }

        if self.kind.is_list() && self.items().is_empty() {
            return Err(DialogError::invalid(format!(
                "{:?} requires at least one item",
                self.kind
            )));
        }

        if let Some(slot) = self.actions.iter().find(|slot| !self.kind.permits(slot.role)) {
            return Err(DialogError::invalid(format!(
                "action role {:?} is not permitted for {:?}",
                slot.role, self.kind
            )));
        }
        if let Some(role) = self
            .kind
            .roles()
            .iter()
            .find(|role| self.label(**role).is_none())
        {
            return Err(DialogError::invalid(format!(
                "{:?} requires a {:?} action",
                self.kind, role
            )));
        }
        if self.actions.iter().any(|slot| slot.label.trim().is_empty()) {
            return Err(DialogError::invalid("action labels must not be empty"));
        }

        self.validate_initial_selection()
    }

    fn validate_initial_selection(&self) -> Result<(), DialogError> {
        let len = self.items().len();
        match (&self.initial, self.kind) {
            (InitialSelection::None, _) => Ok(()),
            (InitialSelection::Index(index), DialogKind::SingleSelectList) => {
                if *index < len {
                    Ok(())
                } else {
                    Err(DialogError::invalid(format!(
                        "initial selection {} is out of range for {} items",
                        index, len
                    )))
                }
            }
            (InitialSelection::Checked(checked), DialogKind::MultiSelectList) => {
                match checked.iter().find(|index| **index >= len) {
                    Some(index) => Err(DialogError::invalid(format!(
                        "checked index {} is out of range for {} items",
                        index, len
                    ))),
                    None => Ok(()),
                }
            }
            (_, kind) => Err(DialogError::invalid(format!(
                "initial selection does not apply to {:?}",
                kind
            ))),
        }
    }
}
