//! Scripted presentation surface for driving the manager without a terminal.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dialogkit::modal::{
    DialogEvent, DialogRequest, LoadingRequest, PresentationSurface, SurfaceError, SurfaceSession,
};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use uuid::Uuid;

/// What one `render` call replays.
#[derive(Debug, Clone)]
pub enum Script {
    /// Deliver the events and keep the dialog up.
    Events(Vec<DialogEvent>),
    /// Deliver the events, then drop the dialog without a terminal event.
    Hangup(Vec<DialogEvent>),
}

pub struct MockSurface {
    scripts: Mutex<VecDeque<Script>>,
    unavailable: bool,
    rendered: Mutex<Vec<DialogRequest>>,
    loading: Mutex<Vec<LoadingRequest>>,
    live: Mutex<Vec<mpsc::UnboundedSender<DialogEvent>>>,
    closes: Arc<AtomicUsize>,
}

impl MockSurface {
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into_iter().collect()),
            unavailable: false,
            rendered: Mutex::new(Vec::new()),
            loading: Mutex::new(Vec::new()),
            live: Mutex::new(Vec::new()),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// One dialog that receives `events` and stays open afterwards.
    pub fn scripted(events: impl IntoIterator<Item = DialogEvent>) -> Self {
        Self::new([Script::Events(events.into_iter().collect())])
    }

    /// One dialog that receives `events` and is then dropped by the host.
    pub fn hangup(events: impl IntoIterator<Item = DialogEvent>) -> Self {
        Self::new([Script::Hangup(events.into_iter().collect())])
    }

    /// A surface that refuses to draw anything.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new([])
        }
    }

    pub fn render_count(&self) -> usize {
        self.rendered.lock().len()
    }

    pub fn rendered(&self) -> Vec<DialogRequest> {
        self.rendered.lock().clone()
    }

    pub fn loading_requests(&self) -> Vec<LoadingRequest> {
        self.loading.lock().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Send an event to every dialog still on screen.
    pub fn push(&self, event: DialogEvent) {
        for tx in self.live.lock().iter() {
            let _ = tx.send(event.clone());
        }
    }

    fn open_session(&self) -> Result<SurfaceSession, SurfaceError> {
        if self.unavailable {
            return Err(SurfaceError::Unavailable("no display".to_string()));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let script = self
            .scripts
            .lock()
            .pop_front()
            .unwrap_or(Script::Events(Vec::new()));
        match script {
            Script::Events(events) => {
                for event in events {
                    let _ = tx.send(event);
                }
                self.live.lock().push(tx);
            }
            Script::Hangup(events) => {
                for event in events {
                    let _ = tx.send(event);
                }
            }
        }

        let closes = Arc::clone(&self.closes);
        Ok(SurfaceSession::new(rx, move || {
            closes.fetch_add(1, Ordering::SeqCst);
        }))
    }
}

impl PresentationSurface for MockSurface {
    fn render(&self, _id: Uuid, request: &DialogRequest) -> Result<SurfaceSession, SurfaceError> {
        let session = self.open_session()?;
        self.rendered.lock().push(request.clone());
        Ok(session)
    }

    fn render_loading(
        &self,
        _id: Uuid,
        request: &LoadingRequest,
    ) -> Result<SurfaceSession, SurfaceError> {
        let session = self.open_session()?;
        self.loading.lock().push(request.clone());
        Ok(session)
    }
}
