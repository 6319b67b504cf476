//! Credential Handling
//!
//! Inspects the API key variable and produces the masked preview
//! shown to the user. The full key value is never echoed, logged,
//! or serialized.

use tracing::debug;

use crate::error::AgentLabError;
use crate::types::KeyStatus;

/// The credential variable the demos require.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Minimum key length for which a first-7/last-4 preview still hides
/// most of the value.
const MIN_MASKABLE_LEN: usize = 12;

/// Mask a key for display: first 7 and last 4 characters.
///
/// Keys too short to mask safely (or containing non-ASCII bytes)
/// render as `****`.
pub fn mask_key(key: &str) -> String {
    let key = key.trim();
    if key.len() < MIN_MASKABLE_LEN || !key.is_ascii() {
        return "****".to_string();
    }
    format!("{}...{}", &key[..7], &key[key.len() - 4..])
}

/// Inspect `OPENAI_API_KEY` for presence and non-emptiness.
pub fn key_status() -> KeyStatus {
    key_status_of(API_KEY_VAR)
}

/// Inspect an arbitrary variable for presence and non-emptiness.
/// Whitespace-only values count as missing.
pub fn key_status_of(var: &str) -> KeyStatus {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => KeyStatus::Present {
            preview: mask_key(&value),
        },
        _ => {
            debug!("Credential variable {} is not set", var);
            KeyStatus::Missing
        }
    }
}

/// Fetch the API key, or fail with guidance.
///
/// Demos call this at startup so a missing key fails fast with a
/// typed error instead of a provider 401 later.
pub fn require_key() -> Result<String, AgentLabError> {
    match std::env::var(API_KEY_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AgentLabError::ApiKey(format!(
            "{} is not set; run `agentlab --setup` for instructions",
            API_KEY_VAR
        ))),
    }
}
