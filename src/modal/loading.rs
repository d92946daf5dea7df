//! Handle for a visible loading indicator.

use uuid::Uuid;

use crate::modal::intent::DialogEvent;
use crate::modal::surface::SurfaceSession;

/// A loading indicator on screen. Dropping the handle takes it down.
#[derive(Debug)]
pub struct LoadingHandle {
    id: Uuid,
    cancelable: bool,
    session: SurfaceSession,
}

impl LoadingHandle {
    pub(crate) fn new(id: Uuid, cancelable: bool, session: SurfaceSession) -> Self {
        Self {
            id,
            cancelable,
            session,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    /// Work finished: take the indicator down.
    pub fn dismiss(mut self) {
        self.session.close();
        tracing::debug!(id = %self.id, "Loading indicator dismissed");
    }

    /// Wait for the indicator to go away on its own.
    ///
    /// `true` when the user dismissed a cancelable indicator, `false` when
    /// the host tore it down.
    pub async fn cancelled(&mut self) -> bool {
        while let Some(event) = self.session.next_event().await {
            match event {
                DialogEvent::OutsideDismiss if self.cancelable => {
                    self.session.close();
                    tracing::debug!(id = %self.id, "Loading indicator cancelled by user");
                    return true;
                }
                DialogEvent::Teardown => break,
                other => tracing::trace!(id = %self.id, event = ?other, "Event ignored"),
            }
        }
        self.session.close();
        false
    }
}
