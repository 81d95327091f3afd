// tests/config_loading.rs

use std::io::Write;
use tempfile::NamedTempFile;

use oplogger::config::{load_and_validate, load_from_path, resolve, ConfigFile};
use oplogger::errors::OperationLoggerError;
use oplogger::telemetry::Severity;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_logger_section_is_loaded() {
    let file = config_file(
        r#"
[logger]
event_level = "debug"
failure_level = "warn"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.logger.event_level, Severity::Debug);
    assert_eq!(cfg.logger.failure_level, Severity::Warn);
}

#[test]
fn empty_file_uses_defaults() {
    let file = config_file("");

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg, ConfigFile::default());
    assert_eq!(cfg.logger.event_level, Severity::Info);
    assert_eq!(cfg.logger.failure_level, Severity::Info);
}

#[test]
fn raw_load_keeps_strings_unchecked() {
    let file = config_file(
        r#"
[logger]
event_level = "loud"
"#,
    );

    let raw = load_from_path(file.path()).unwrap();

    assert_eq!(raw.logger.event_level, "loud");
    assert_eq!(raw.logger.failure_level, "info");
}

#[test]
fn unknown_severity_returns_config_error() {
    let file = config_file(
        r#"
[logger]
failure_level = "loud"
"#,
    );

    match load_and_validate(file.path()) {
        Err(OperationLoggerError::ConfigError(msg)) => {
            assert!(msg.contains("failure_level"));
            assert!(msg.contains("loud"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_returns_toml_error() {
    let file = config_file(
        r#"
[logger]
colour = "blue"
"#,
    );

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(OperationLoggerError::TomlError(_))));
}

#[test]
fn missing_explicit_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = resolve(Some(&missing));

    assert!(matches!(result, Err(OperationLoggerError::IoError(_))));
}

#[test]
fn explicit_file_wins_in_resolve() {
    let file = config_file(
        r#"
[logger]
event_level = "trace"
"#,
    );

    let cfg = resolve(Some(file.path())).unwrap();

    assert_eq!(cfg.logger.event_level, Severity::Trace);
}
