//! Error types for presenting dialogs.
//!
//! Every failure is terminal for the dialog it belongs to. Nothing is
//! retried internally; the caller decides whether to resubmit.

use thiserror::Error;

use crate::modal::SurfaceError;

/// Errors that can end a `present` call without an outcome.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Malformed request, detected before anything is shown.
    #[error("Invalid dialog request: {0}")]
    InvalidRequest(String),

    /// The presentation surface could not render the dialog.
    #[error("Presentation unavailable: {0}")]
    PresentationUnavailable(String),

    /// The dialog was torn down by the host without a user event.
    #[error("Dialog aborted by the host before any user interaction")]
    Aborted,
}

impl From<SurfaceError> for DialogError {
    fn from(err: SurfaceError) -> Self {
        DialogError::PresentationUnavailable(err.to_string())
    }
}

impl DialogError {
    /// Stable tag for logs and machine-readable output.
    pub fn error_type(&self) -> &'static str {
        match self {
            DialogError::InvalidRequest(_) => "invalid_request",
            DialogError::PresentationUnavailable(_) => "presentation_unavailable",
            DialogError::Aborted => "aborted",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DialogError::InvalidRequest(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_maps_to_presentation_unavailable() {
        let err: DialogError = SurfaceError::Unavailable("window destroyed".into()).into();
        assert_eq!(err.error_type(), "presentation_unavailable");
        assert!(err.to_string().contains("window destroyed"));
    }

    #[test]
    fn error_types_are_distinct() {
        assert_eq!(DialogError::invalid("x").error_type(), "invalid_request");
        assert_eq!(DialogError::Aborted.error_type(), "aborted");
    }
}
