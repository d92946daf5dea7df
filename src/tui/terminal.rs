//! Raw-mode terminal setup with guaranteed restore.

use std::io::{self, Stdout};
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type DialogTerminal = Terminal<CrosstermBackend<Stdout>>;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restore action for the terminal currently in raw mode, if any.
///
/// Process-wide so the single panic hook can reach whichever guard is live.
static CLEANUP: Lazy<Mutex<Option<Cleanup>>> = Lazy::new(|| Mutex::new(None));
static PANIC_HOOK: Once = Once::new();

/// Restores the terminal when dropped, or on panic.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        *CLEANUP.lock() = Some(Box::new(cleanup));
        PANIC_HOOK.call_once(|| {
            let default_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                run_cleanup();
                default_hook(info);
            }));
        });
        Self { _private: () }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_cleanup();
    }
}

fn run_cleanup() {
    // Take first so the lock is released before the cleanup runs.
    let cleanup = CLEANUP.lock().take();
    if let Some(cleanup) = cleanup {
        cleanup();
    }
}

pub fn setup_terminal() -> io::Result<(DialogTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok((terminal, guard))
}
