//! Base trait for reducer-driven state.

/// Marker trait for state snapshots.
///
/// States are replaced wholesale on every transition, so they must be
/// cheap to clone and comparable to detect no-op events.
pub trait UiState: Clone + PartialEq + Send + 'static {}
