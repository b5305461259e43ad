//! Structured logging
//!
//! A `tracing-subscriber` registry writing to stderr, plain or JSON, with an optional
//! daily-rolling log file. `FINJECT_LOG` takes precedence over the configured level.

use crate::constants::LOG_FILTER_ENV;
use finject_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Install the global subscriber
///
/// Fails if the level is invalid or a subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));
    let appender = config
        .file_output
        .as_deref()
        .map(|path| daily_appender(path, config.max_files))
        .transpose()?;
    let registry = Registry::default().with(filter);

    // JSON and plain layers are distinct types
    let installed = match (config.json_format, appender) {
        (true, Some(appender)) => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(fmt::layer().json().with_ansi(false).with_writer(appender))
            .try_init(),
        (true, None) => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        (false, Some(appender)) => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(fmt::layer().with_ansi(false).with_writer(appender))
            .try_init(),
        (false, None) => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.map_err(|err| Error::Infrastructure {
        message: format!("Failed to install log subscriber: {err}"),
        source: Some(Box::new(err)),
    })?;

    info!(level = %level, "Logging initialized");
    Ok(())
}

/// `<dir>/<stem>.<date>` files rotated daily, keeping the newest `max_files`
pub fn daily_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .map_or_else(|| "finject".to_string(), |stem| stem.to_string_lossy().into_owned());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .map_err(|err| Error::Infrastructure {
            message: format!("Failed to open log file in {}: {err}", directory.display()),
            source: Some(Box::new(err)),
        })
}

/// Map a configured level name to a tracing [`Level`]
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::config(format!(
            "Unknown log level '{other}', expected trace, debug, info, warn or error"
        ))),
    }
}

pub fn log_config_loaded(config_path: &Path) {
    debug!(path = %config_path.display(), "Loaded configuration file");
}
