// Rust guideline compliant 2026-10-19

//! Logging setup for hook runs.
//!
//! Standard error is the pusher's terminal, so logging is off unless a level
//! is configured. With `log_file` set, JSON events are appended to that file
//! through a non-blocking writer instead.

use pushgate_core::{Config, Error, Result};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global subscriber described by `config`.
///
/// # Returns
///
/// A guard that flushes the log file when dropped; keep it alive for the
/// whole run. `None` when logging goes to standard error or is off.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(level) = parse_log_level(&config.log_level)? else {
        return Ok(None);
    };

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Config(format!("Cannot open log file {}: {}", path.display(), e)))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a configured level; `off` yields `None`.
///
/// # Errors
///
/// Returns `Error::Config` for unknown levels.
pub fn parse_log_level(level: &str) -> Result<Option<Level>> {
    match level.to_lowercase().as_str() {
        "off" => Ok(None),
        "error" => Ok(Some(Level::ERROR)),
        "warn" => Ok(Some(Level::WARN)),
        "info" => Ok(Some(Level::INFO)),
        "debug" => Ok(Some(Level::DEBUG)),
        "trace" => Ok(Some(Level::TRACE)),
        other => Err(Error::Config(format!("Invalid log level: {}", other))),
    }
}
