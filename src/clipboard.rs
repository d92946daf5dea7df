//! Clipboard access for copying dialog results and reading pasted text.

use arboard::Clipboard;
use thiserror::Error;

use crate::notify::NotificationSink;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }

    /// Current clipboard text, or `None` if it is empty or not text.
    pub fn get_text(&mut self) -> Option<String> {
        match self.clipboard.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = %err, "Clipboard holds no text");
                None
            }
        }
    }

    /// Copy and confirm with a short notification.
    pub fn copy_with_notice(
        &mut self,
        text: &str,
        sink: &dyn NotificationSink,
    ) -> Result<(), ClipboardError> {
        self.set_text(text)?;
        sink.notify_short("Copied to clipboard");
        Ok(())
    }
}
