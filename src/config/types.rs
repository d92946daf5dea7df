use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub labels: ButtonLabels,
    #[serde(default)]
    pub dialogs: DialogDefaults,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default button labels applied to the slots each dialog kind owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    /// Positive label of alerts, text inputs and lists.
    #[serde(default = "default_ok")]
    pub ok: String,
    /// Negative label of text inputs and lists.
    #[serde(default = "default_cancel")]
    pub cancel: String,
    /// Positive label of confirmations.
    #[serde(default = "default_yes")]
    pub yes: String,
    /// Negative label of confirmations.
    #[serde(default = "default_no")]
    pub no: String,
}

/// Behaviour shared by every dialog the binary opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogDefaults {
    /// Whether outside taps / Esc may dismiss dialogs (default: true).
    #[serde(default = "default_dismissible")]
    pub dismissible: bool,
    /// Message of loading indicators (default: "Loading...").
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
}

/// Display times of transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Short toast in milliseconds (default: 2000).
    #[serde(default = "default_short_ms")]
    pub short_ms: u64,
    /// Long toast in milliseconds (default: 3500).
    #[serde(default = "default_long_ms")]
    pub long_ms: u64,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_ok() -> String {
    "OK".to_string()
}

fn default_cancel() -> String {
    "Cancel".to_string()
}

fn default_yes() -> String {
    "Yes".to_string()
}

fn default_no() -> String {
    "No".to_string()
}

fn default_dismissible() -> bool {
    true
}

fn default_loading_message() -> String {
    "Loading...".to_string()
}

fn default_short_ms() -> u64 {
    2000
}

fn default_long_ms() -> u64 {
    3500
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            ok: default_ok(),
            cancel: default_cancel(),
            yes: default_yes(),
            no: default_no(),
        }
    }
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            dismissible: default_dismissible(),
            loading_message: default_loading_message(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            short_ms: default_short_ms(),
            long_ms: default_long_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
