use dialogkit::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.labels.ok, "OK");
    assert_eq!(config.labels.cancel, "Cancel");
    assert_eq!(config.labels.yes, "Yes");
    assert_eq!(config.labels.no, "No");
    assert!(config.dialogs.dismissible);
    assert_eq!(config.dialogs.loading_message, "Loading...");
    assert_eq!(config.toast.short_ms, 2000);
    assert_eq!(config.toast.long_ms, 3500);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("dialogkit/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[labels]
yes = "Proceed"

[toast]
long_ms = 5000
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.labels.yes, "Proceed");
    assert_eq!(config.labels.no, "No");
    assert_eq!(config.toast.short_ms, 2000);
    assert_eq!(config.toast.long_ms, 5000);
    assert!(config.dialogs.dismissible);
}

#[test]
fn test_full_file_round_trips_through_toml() {
    let (_dir, path) = write_config(
        r#"
[labels]
ok = "Fine"
cancel = "Back"
yes = "Sure"
no = "Nope"

[dialogs]
dismissible = false
loading_message = "Hold on"

[toast]
short_ms = 1000
long_ms = 1000

[logging]
filter = "dialogkit=debug"
file = "/tmp/dialogkit.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.labels.ok, "Fine");
    assert!(!config.dialogs.dismissible);
    assert_eq!(config.dialogs.loading_message, "Hold on");
    assert_eq!(config.logging.filter, "dialogkit=debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/dialogkit.log"))
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[labels\nok = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_blank_label_fails_validation() {
    let (_dir, path) = write_config("[labels]\ncancel = \"  \"\n");

    let err = Config::load_from(&path).unwrap_err();

    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("cancel")),
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_toast_duration_fails_validation() {
    let mut config = Config::default();
    config.toast.short_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_short_toast_longer_than_long_fails_validation() {
    let mut config = Config::default();
    config.toast.short_ms = 4000;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_blank_loading_message_fails_validation() {
    let mut config = Config::default();
    config.dialogs.loading_message = String::new();
    assert!(config.validate().is_err());
}
