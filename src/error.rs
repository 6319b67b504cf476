//! Error Types
//!
//! Typed errors for the agentlab library surface. The bootstrap path
//! deliberately has no failure mode (missing files and keys are
//! normal states with guidance output); these errors serve the
//! library functions the demos call directly.

use thiserror::Error;

/// Errors produced by agentlab library functions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AgentLabError {
    /// Invalid or unusable configuration (bad log level, bad paths).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API credential is missing or unusable.
    #[error("API key error: {0}")]
    ApiKey(String),

    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A file could not be read or written.
    #[error("file operation failed: {0}")]
    FileOperation(String),
}
