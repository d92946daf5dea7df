//! Terminal result of a dialog instance.

use std::fmt;

use serde::Serialize;

/// A chosen list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedItem {
    pub index: usize,
    pub label: String,
}

impl SelectedItem {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Data carried by a positive outcome, depending on the dialog kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    /// Alert, Confirm, ThreeChoice.
    None,
    /// Field text of a text input, verbatim.
    Text(String),
    /// Single-select and plain lists.
    Item(SelectedItem),
    /// Multi-select lists, in ascending index order.
    Items(Vec<SelectedItem>),
}

/// Exactly one of these is produced per resolved dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "payload", rename_all = "snake_case")]
pub enum DialogOutcome {
    Positive(Payload),
    Negative,
    Neutral,
    /// Outside tap or back navigation on a dismissible dialog.
    Dismissed,
}

impl DialogOutcome {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Positive(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<&SelectedItem> {
        match self {
            Self::Positive(Payload::Item(item)) => Some(item),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[SelectedItem]> {
        match self {
            Self::Positive(Payload::Items(items)) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for DialogOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive(Payload::None) => write!(f, "Confirmed"),
            Self::Positive(Payload::Text(text)) => write!(f, "Entered \"{}\"", text),
            Self::Positive(Payload::Item(item)) => write!(f, "Selected {}", item.label),
            Self::Positive(Payload::Items(items)) if items.is_empty() => {
                write!(f, "Nothing selected")
            }
            Self::Positive(Payload::Items(items)) => {
                let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
                write!(f, "Selected {}", labels.join(", "))
            }
            Self::Negative => write!(f, "Cancelled"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Dismissed => write!(f, "Dismissed"),
        }
    }
}
