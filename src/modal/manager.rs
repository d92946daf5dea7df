//! Modal interaction manager: presents requests and resolves outcomes.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::DialogError;
use crate::modal::loading::LoadingHandle;
use crate::modal::outcome::DialogOutcome;
use crate::modal::reducer::DialogReducer;
use crate::modal::request::DialogRequest;
use crate::modal::state::DialogState;
use crate::modal::surface::{LoadingRequest, PresentationSurface};
use crate::mvi::Reducer;

/// Presents dialogs on a surface and drives each instance to one outcome.
///
/// Each call owns its own instance state; concurrent calls share nothing
/// but the surface.
pub struct ModalManager<S> {
    surface: Arc<S>,
}

impl<S> Clone for ModalManager<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
        }
    }
}

impl<S: PresentationSurface> ModalManager<S> {
    pub fn new(surface: S) -> Self {
        Self::from_arc(Arc::new(surface))
    }

    pub fn from_arc(surface: Arc<S>) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Show `request` and wait for its outcome.
    ///
    /// Dropping the returned future before it completes closes the dialog.
    pub async fn present(&self, request: DialogRequest) -> Result<DialogOutcome, DialogError> {
        if let Err(err) = request.validate() {
            tracing::warn!(kind = ?request.kind(), error = %err, "Rejected dialog request");
            return Err(err);
        }

        let id = Uuid::new_v4();
        let span = tracing::debug_span!("dialog", %id, kind = ?request.kind());
        self.drive(id, Arc::new(request)).instrument(span).await
    }

    /// Show `request` on the runtime and hand the result to `callback`.
    ///
    /// The callback runs at most once, and never after
    /// [`PendingDialog::abandon`]. Must be called within a tokio runtime.
    pub fn present_with<F>(&self, request: DialogRequest, callback: F) -> PendingDialog
    where
        F: FnOnce(Result<DialogOutcome, DialogError>) + Send + 'static,
    {
        let manager = self.clone();
        let handle = tokio::spawn(async move {
            let result = manager.present(request).await;
            callback(result);
        });
        PendingDialog { handle }
    }

    /// Show a loading indicator until the returned handle is dismissed.
    pub fn show_loading(&self, request: LoadingRequest) -> Result<LoadingHandle, DialogError> {
        if request.message.trim().is_empty() {
            return Err(DialogError::invalid("loading message must not be empty"));
        }

        let id = Uuid::new_v4();
        let session = self.surface.render_loading(id, &request).map_err(|err| {
            tracing::warn!(%id, error = %err, "Loading indicator unavailable");
            DialogError::from(err)
        })?;
        tracing::debug!(%id, cancelable = request.cancelable, "Loading indicator shown");
        Ok(LoadingHandle::new(id, request.cancelable, session))
    }

    async fn drive(
        &self,
        id: Uuid,
        request: Arc<DialogRequest>,
    ) -> Result<DialogOutcome, DialogError> {
        let mut session = self.surface.render(id, &request).map_err(|err| {
            tracing::warn!(error = %err, "Presentation surface unavailable");
            DialogError::from(err)
        })?;

        let mut state = DialogState::open(request);
        while let Some(event) = session.next_event().await {
            tracing::debug!(?event, "Dialog event");
            let before = state.clone();
            state = DialogReducer::reduce(state, event);

            match state {
                DialogState::Resolved(outcome) => {
                    session.close();
                    tracing::info!(%outcome, "Dialog resolved");
                    return Ok(outcome);
                }
                DialogState::Aborted => {
                    session.close();
                    tracing::warn!("Dialog torn down by host");
                    return Err(DialogError::Aborted);
                }
                open => {
                    if open == before {
                        tracing::trace!("Event ignored");
                    }
                    state = open;
                }
            }
        }

        tracing::warn!("Surface dropped dialog without an event");
        Err(DialogError::Aborted)
    }
}

/// A dialog running on the runtime with a callback attached.
///
/// Dropping this handle detaches it; the dialog keeps running.
#[derive(Debug)]
pub struct PendingDialog {
    handle: JoinHandle<()>,
}

impl PendingDialog {
    /// Lose interest in the outcome: the dialog is closed and the
    /// callback is never invoked.
    pub fn abandon(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the interaction ends. `true` if the callback ran.
    pub async fn join(self) -> bool {
        self.handle.await.is_ok()
    }
}
