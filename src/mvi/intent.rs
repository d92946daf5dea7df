//! Marker trait for events fed into a reducer.

/// Marker trait for intent objects.
///
/// For dialogs an intent is one UI event: a button press, an item press or
/// toggle, a text edit, an outside dismissal, or host teardown.
pub trait Intent: Send + 'static {}
