//! Presentation surface backed by the controlling terminal.
//!
//! Every dialog, loading indicator and toast gets a dedicated thread that
//! owns the terminal for its lifetime. Only one of them may hold the
//! terminal at a time. A closed dialog or a toast gives the terminal up to
//! the next claimer; an open dialog does not.

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use parking_lot::{Condvar, Mutex};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::ToastConfig;
use crate::modal::{
    DialogEvent, DialogRequest, LoadingRequest, PresentationSurface, SurfaceError, SurfaceSession,
};
use crate::notify::{NotificationSink, ToastDuration};
use crate::tui::render::{render_dialog, render_loading, render_toast};
use crate::tui::terminal::{setup_terminal, DialogTerminal, TerminalGuard};
use crate::tui::view::{DialogView, LoadingView};

/// Input poll timeout; also bounds how long a stop request waits.
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);
/// How long a claimer waits for a stopping holder to restore the terminal.
const RELEASE_TIMEOUT: Duration = Duration::from_millis(500);

pub struct TerminalSurface {
    toast: ToastConfig,
    slot: Arc<TerminalSlot>,
    threads: Mutex<Vec<JoinHandle<()>>>,
}

impl TerminalSurface {
    pub fn new(toast: ToastConfig) -> Self {
        Self {
            toast,
            slot: TerminalSlot::new(),
            threads: Mutex::new(Vec::new()),
        }
    }

    /// Block until every dialog, indicator and toast has restored the
    /// terminal. Call before the process exits.
    pub fn wait_idle(&self) {
        let threads: Vec<JoinHandle<()>> = self.threads.lock().drain(..).collect();
        for handle in threads {
            if handle.join().is_err() {
                tracing::warn!("Terminal surface thread panicked");
            }
        }
    }

    /// Claim the terminal and put it into dialog mode.
    ///
    /// May block for up to [`RELEASE_TIMEOUT`] while a closed dialog or a
    /// toast restores the terminal.
    fn acquire(&self, yields: bool) -> Result<Lease, SurfaceError> {
        if !io::stdout().is_terminal() {
            return Err(SurfaceError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }
        let claim = self.slot.claim(yields)?;
        let (terminal, guard) = setup_terminal()?;
        Ok(Lease {
            terminal,
            guard: Some(guard),
            claim,
        })
    }

    fn spawn<F>(&self, name: &str, body: F) -> Result<(), SurfaceError>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(body)?;
        let mut threads = self.threads.lock();
        threads.retain(|handle| !handle.is_finished());
        threads.push(handle);
        Ok(())
    }
}

/// Who owns the terminal right now.
struct TerminalSlot {
    holder: Mutex<Option<Holder>>,
    released: Condvar,
}

struct Holder {
    stop: Arc<AtomicBool>,
    /// Toasts give way to any claimer without being asked.
    yields: bool,
}

impl TerminalSlot {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            holder: Mutex::new(None),
            released: Condvar::new(),
        })
    }

    /// Take the terminal, asking a stopping or yielding holder to let go.
    fn claim(self: &Arc<Self>, yields: bool) -> Result<Claim, SurfaceError> {
        let deadline = Instant::now() + RELEASE_TIMEOUT;
        let mut holder = self.holder.lock();
        while let Some(current) = holder.as_ref() {
            if !current.yields && !current.stop.load(Ordering::SeqCst) {
                return Err(SurfaceError::Unavailable(
                    "terminal already shows a dialog".to_string(),
                ));
            }
            current.stop.store(true, Ordering::SeqCst);
            if self.released.wait_until(&mut holder, deadline).timed_out() && holder.is_some() {
                return Err(SurfaceError::Unavailable(
                    "terminal was not released in time".to_string(),
                ));
            }
        }

        let stop = Arc::new(AtomicBool::new(false));
        *holder = Some(Holder {
            stop: Arc::clone(&stop),
            yields,
        });
        Ok(Claim {
            slot: Arc::clone(self),
            stop,
        })
    }
}

/// Registered ownership of the terminal; released on drop.
struct Claim {
    slot: Arc<TerminalSlot>,
    stop: Arc<AtomicBool>,
}

impl Claim {
    fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

impl Drop for Claim {
    fn drop(&mut self) {
        *self.slot.holder.lock() = None;
        self.slot.released.notify_all();
    }
}

/// Exclusive use of the terminal in dialog mode.
struct Lease {
    terminal: DialogTerminal,
    guard: Option<TerminalGuard>,
    claim: Claim,
}

impl Drop for Lease {
    fn drop(&mut self) {
        // Restore the terminal; the claim is released after this, with the
        // remaining fields.
        drop(self.guard.take());
    }
}

impl PresentationSurface for TerminalSurface {
    fn render(&self, id: Uuid, request: &DialogRequest) -> Result<SurfaceSession, SurfaceError> {
        let lease = self.acquire(false)?;
        let stop = lease.claim.stop_handle();
        let (tx, rx) = mpsc::unbounded_channel();
        let view = DialogView::new(request.clone());

        self.spawn(&format!("dialog-{}", id), move || run_dialog(lease, view, tx))?;
        tracing::debug!(%id, "Dialog drawn on terminal");

        Ok(SurfaceSession::new(rx, move || {
            stop.store(true, Ordering::SeqCst)
        }))
    }

    fn render_loading(
        &self,
        id: Uuid,
        request: &LoadingRequest,
    ) -> Result<SurfaceSession, SurfaceError> {
        let lease = self.acquire(false)?;
        let stop = lease.claim.stop_handle();
        let (tx, rx) = mpsc::unbounded_channel();
        let view = LoadingView::new(request.message.clone(), request.cancelable);

        self.spawn(&format!("loading-{}", id), move || run_loading(lease, view, tx))?;

        Ok(SurfaceSession::new(rx, move || {
            stop.store(true, Ordering::SeqCst)
        }))
    }
}

impl NotificationSink for TerminalSurface {
    fn notify(&self, message: &str, duration: ToastDuration) {
        let lease = match self.acquire(true) {
            Ok(lease) => lease,
            Err(err) => {
                tracing::info!(error = %err, "Toast not drawn: {}", message);
                return;
            }
        };
        let message = message.to_string();
        let visible_for = duration.as_duration(&self.toast);
        if let Err(err) = self.spawn("toast", move || run_toast(lease, &message, visible_for)) {
            tracing::warn!(error = %err, "Failed to start toast thread");
        }
    }
}

fn run_dialog(mut lease: Lease, mut view: DialogView, tx: mpsc::UnboundedSender<DialogEvent>) {
    let result = (|| -> io::Result<()> {
        while !lease.claim.should_stop() {
            lease.terminal.draw(|frame| render_dialog(frame, &view))?;
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if let Some(dialog_event) = view.handle_key(key) {
                    if tx.send(dialog_event).is_err() {
                        break;
                    }
                }
            }
        }
        Ok(())
    })();

    if let Err(err) = result {
        tracing::warn!(error = %err, "Terminal failed while showing dialog");
        let _ = tx.send(DialogEvent::Teardown);
    }
}

fn run_loading(mut lease: Lease, mut view: LoadingView, tx: mpsc::UnboundedSender<DialogEvent>) {
    let result = (|| -> io::Result<()> {
        let mut last_tick = Instant::now();
        while !lease.claim.should_stop() {
            lease.terminal.draw(|frame| render_loading(frame, &view))?;
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(dialog_event) = view.handle_key(key) {
                        if tx.send(dialog_event).is_err() {
                            break;
                        }
                    }
                }
            }
            if last_tick.elapsed() >= SPINNER_INTERVAL {
                view.advance();
                last_tick = Instant::now();
            }
        }
        Ok(())
    })();

    if let Err(err) = result {
        tracing::warn!(error = %err, "Terminal failed while showing loading indicator");
        let _ = tx.send(DialogEvent::Teardown);
    }
}

/// Show the toast until it expires or someone else claims the terminal.
fn run_toast(mut lease: Lease, message: &str, visible_for: Duration) {
    if let Err(err) = lease.terminal.draw(|frame| render_toast(frame, message)) {
        tracing::warn!(error = %err, "Failed to draw toast");
        return;
    }
    hold_until(&lease.claim, Instant::now() + visible_for);
}

fn hold_until(claim: &Claim, deadline: Instant) {
    while !claim.should_stop() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        thread::sleep(remaining.min(POLL_INTERVAL));
    }
}
