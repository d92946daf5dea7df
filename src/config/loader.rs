use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dialogkit/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dialogkit").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Button labels and the loading message are not blank
    /// - Toast durations are positive and short <= long
    pub fn validate(&self) -> Result<(), ConfigError> {
        let labels = [
            ("ok", &self.labels.ok),
            ("cancel", &self.labels.cancel),
            ("yes", &self.labels.yes),
            ("no", &self.labels.no),
        ];
        if let Some((name, _)) = labels.iter().find(|(_, label)| label.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Label '{}' must not be empty", name),
            });
        }

        if self.dialogs.loading_message.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Loading message must not be empty".to_string(),
            });
        }

        if self.toast.short_ms == 0 || self.toast.long_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Toast durations must be positive".to_string(),
            });
        }

        if self.toast.short_ms > self.toast.long_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Short toast ({}ms) must not outlast long toast ({}ms)",
                    self.toast.short_ms, self.toast.long_ms
                ),
            });
        }

        Ok(())
    }
}
