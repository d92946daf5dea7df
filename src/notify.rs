//! Transient notifications (toasts).
//!
//! Callers notify after they have an outcome in hand; the dialog engine
//! itself never does.

use std::time::Duration;

use crate::config::ToastConfig;

/// How long a notification stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    pub fn as_duration(self, config: &ToastConfig) -> Duration {
        match self {
            ToastDuration::Short => Duration::from_millis(config.short_ms),
            ToastDuration::Long => Duration::from_millis(config.long_ms),
        }
    }
}

/// Fire-and-forget message display.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, duration: ToastDuration);

    fn notify_short(&self, message: &str) {
        self.notify(message, ToastDuration::Short);
    }

    fn notify_long(&self, message: &str) {
        self.notify(message, ToastDuration::Long);
    }
}

/// Sink that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str, duration: ToastDuration) {
        tracing::info!(target: "dialogkit::toast", ?duration, "{}", message);
    }
}
