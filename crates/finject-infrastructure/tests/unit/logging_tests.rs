//! Logging Tests

use finject_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use finject_infrastructure::logging::{daily_appender, parse_log_level, LoggingConfig};
use std::io::Write;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_daily_appender_writes_under_file_stem() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut appender = daily_appender(&temp_dir.path().join("finject.log"), 2).unwrap();
    appender.write_all(b"line\n").unwrap();
    appender.flush().unwrap();

    let names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("finject."), "{names:?}");
}
