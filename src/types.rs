//! agentlab - Type Definitions
//!
//! Shared report types produced by the bootstrap, status, and
//! env-file loading operations.

use serde::{Deserialize, Serialize};

// ─── Credential ──────────────────────────────────────────────────

/// Presence of the API credential in the process environment.
///
/// The `Present` variant carries only the masked preview -- the full
/// key value never leaves the process.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum KeyStatus {
    Present { preview: String },
    Missing,
}

impl KeyStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, KeyStatus::Present { .. })
    }
}

// ─── Env File ────────────────────────────────────────────────────

/// Result of loading a `KEY=VALUE` configuration file into the
/// process environment.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnvFileReport {
    /// Path the file was read from.
    pub path: String,
    /// Variables newly bound into the process environment.
    pub vars_set: usize,
    /// Variables skipped because the parent environment already set them.
    pub vars_preexisting: usize,
    /// Lines that were neither comments nor well-formed assignments.
    pub skipped_lines: usize,
}

// ─── Bootstrap ───────────────────────────────────────────────────

/// Summary of one bootstrap run. The bootstrap itself cannot fail;
/// this records which branches were taken.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapReport {
    /// Whether the configuration file existed and was loaded.
    pub env_loaded: bool,
    /// Variables bound into the environment (0 when the file is absent).
    pub vars_set: usize,
    /// Credential state after loading.
    pub key: KeyStatus,
}

// ─── Status ──────────────────────────────────────────────────────

/// Snapshot of the demo environment, shown by `agentlab --status`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub env_file: String,
    pub env_file_present: bool,
    pub key: KeyStatus,
    pub logs_dir: String,
    /// ISO-8601 timestamp of when this status was taken.
    pub checked_at: String,
}
