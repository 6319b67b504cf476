//! Paths
//!
//! Fixed locations of the configuration file, its template, and the
//! log directory. The configuration file is `.env` in the working
//! directory -- the demos are always launched from the repo root.

use std::path::PathBuf;

/// Configuration file name, relative to the working directory.
pub const ENV_FILENAME: &str = ".env";

/// Template shipped alongside the repo for creating `.env`.
pub const ENV_TEMPLATE_FILENAME: &str = ".env.example";

/// Environment variable overriding the log directory.
const LOG_DIR_VAR: &str = "AGENTLAB_LOG_DIR";

/// Default log directory, relative to the working directory.
const DEFAULT_LOG_DIR: &str = "logs";

/// Returns the path to the configuration file: `./.env`.
pub fn env_file_path() -> PathBuf {
    PathBuf::from(ENV_FILENAME)
}

/// Returns the path to the configuration template: `./.env.example`.
pub fn env_template_path() -> PathBuf {
    PathBuf::from(ENV_TEMPLATE_FILENAME)
}

/// Returns the log directory.
///
/// Defaults to `./logs`; `AGENTLAB_LOG_DIR` overrides it and may
/// start with `~`.
pub fn log_dir() -> PathBuf {
    match std::env::var(LOG_DIR_VAR) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(resolve_path(dir.trim())),
        _ => PathBuf::from(DEFAULT_LOG_DIR),
    }
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's
/// home directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_with_tilde() {
        let resolved = resolve_path("~/some/path");
        assert!(!resolved.starts_with('~'));
        assert!(resolved.ends_with("some/path"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        let path = "/absolute/path/to/file";
        assert_eq!(resolve_path(path), path);
    }

    #[test]
    fn test_env_file_path_is_relative() {
        assert_eq!(env_file_path(), PathBuf::from(".env"));
        assert!(env_file_path().is_relative());
    }

    #[test]
    fn test_log_dir_override_expands_tilde() {
        std::env::set_var("AGENTLAB_LOG_DIR", "~/agentlab-logs");
        let dir = log_dir();
        std::env::remove_var("AGENTLAB_LOG_DIR");
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.to_string_lossy().ends_with("agentlab-logs"));
    }
}
