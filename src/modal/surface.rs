//! Seam between the dialog engine and whatever draws the dialog.

use std::fmt;

use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::modal::intent::DialogEvent;
use crate::modal::request::DialogRequest;

/// Errors a surface reports when it cannot show anything.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("{0}")]
    Unavailable(String),

    #[error("surface I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What a loading indicator shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingRequest {
    pub message: String,
    /// Whether back navigation / outside taps may dismiss it.
    pub cancelable: bool,
}

impl Default for LoadingRequest {
    fn default() -> Self {
        Self {
            message: "Loading...".to_string(),
            cancelable: false,
        }
    }
}

impl LoadingRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

type Closer = Box<dyn FnOnce() + Send + 'static>;

/// A live dialog on a surface: its event stream and a way to close it.
///
/// When every sender of the event stream is gone without a terminal event,
/// the host has torn the dialog down.
pub struct SurfaceSession {
    events: mpsc::UnboundedReceiver<DialogEvent>,
    closer: Option<Closer>,
}

impl SurfaceSession {
    pub fn new<F>(events: mpsc::UnboundedReceiver<DialogEvent>, close: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            events,
            closer: Some(Box::new(close)),
        }
    }

    /// Next UI event, or `None` once the host has dropped the dialog.
    pub async fn next_event(&mut self) -> Option<DialogEvent> {
        self.events.recv().await
    }

    /// Tell the surface to take the dialog down. Idempotent.
    pub fn close(&mut self) {
        self.events.close();
        if let Some(closer) = self.closer.take() {
            closer();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closer.is_none()
    }
}

impl Drop for SurfaceSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for SurfaceSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceSession")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Host facility that draws dialogs and reports raw UI events.
pub trait PresentationSurface: Send + Sync + 'static {
    /// Show a dialog. The request has already been validated.
    fn render(&self, id: Uuid, request: &DialogRequest) -> Result<SurfaceSession, SurfaceError>;

    /// Show a loading indicator. Only `OutsideDismiss` and `Teardown` are
    /// meaningful on its event stream.
    fn render_loading(
        &self,
        id: Uuid,
        request: &LoadingRequest,
    ) -> Result<SurfaceSession, SurfaceError>;
}
