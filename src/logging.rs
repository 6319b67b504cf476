//! Logging Setup
//!
//! Console logging via `tracing`, with an optional plain-text file
//! layer. A log directory that cannot be created disables file
//! logging with a warning instead of failing -- the demos should
//! never be blocked by an unwritable `logs/` directory.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AgentLabError;

/// Default log file name inside the log directory.
pub const LOG_FILENAME: &str = "agentlab.log";

/// Parse a log level name, case-insensitively.
pub fn parse_level(level: &str) -> Result<Level, AgentLabError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(AgentLabError::Configuration(format!(
            "invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            other
        ))),
    }
}

/// Install the global subscriber: console output always, plus an
/// append-mode file at `log_file` when one is given and writable.
///
/// Installing twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<(), AgentLabError> {
    let level = parse_level(level)?;

    let file_layer = log_file.and_then(open_log_file).map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Arc::new(file))
    });

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .try_init();

    Ok(())
}

/// Open the log file in append mode, creating parent directories.
/// Returns `None` (console-only logging) on any failure.
fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!(
                    "Warning: could not create log directory {}: {}. File logging disabled.",
                    parent.display(),
                    e
                );
                return None;
            }
        }
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: could not open log file {}: {}. File logging disabled.",
                path.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_accepts_known_names() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("  warn ").unwrap(), Level::WARN);
    }

    #[test]
    fn test_parse_level_rejects_unknown_names() {
        let result = parse_level("verbose");
        assert!(matches!(result, Err(AgentLabError::Configuration(_))));
    }

    #[test]
    fn test_open_log_file_creates_parent_directory() {
        let dir = std::env::temp_dir().join("agentlab-log-test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join(LOG_FILENAME);

        let file = open_log_file(&path);
        assert!(file.is_some());
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
