//! Env Template
//!
//! The embedded `.env.example` content and writers for creating the
//! template and a populated `.env`. Existing files are never
//! overwritten.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AgentLabError;

/// Contents of `.env.example`.
pub const ENV_TEMPLATE: &str = r#"# agentlab environment configuration
# Copy this file to .env and fill in your values.

# Required: OpenAI API key used by the agent demos
OPENAI_API_KEY=

# Optional: default model for the demos
# OPENAI_MODEL=gpt-4o-mini

# Optional: log level for agentlab and the demos
# AGENTLAB_LOG=info
"#;

/// Write `.env.example` at the given path.
///
/// Will not overwrite an existing file. Returns Ok(()) if the file
/// already exists.
pub fn write_env_template(path: &Path) -> Result<(), AgentLabError> {
    if path.exists() {
        warn!(
            "Template already exists at {}, not overwriting",
            path.display()
        );
        return Ok(());
    }

    fs::write(path, ENV_TEMPLATE).map_err(|e| {
        AgentLabError::FileOperation(format!("could not write {}: {}", path.display(), e))
    })?;

    info!("Wrote env template to {}", path.display());
    Ok(())
}

/// Write a `.env` file, optionally pre-filled with an API key.
///
/// The file may contain the credential, so it is written with mode
/// 0o600. Refuses to overwrite an existing file.
pub fn write_env_file(path: &Path, api_key: &str) -> Result<(), AgentLabError> {
    if path.exists() {
        return Err(AgentLabError::FileOperation(format!(
            "{} already exists; edit it directly instead",
            path.display()
        )));
    }

    let contents = if api_key.is_empty() {
        ENV_TEMPLATE.to_string()
    } else {
        ENV_TEMPLATE.replace(
            "OPENAI_API_KEY=",
            &format!("OPENAI_API_KEY={}", api_key),
        )
    };

    fs::write(path, &contents).map_err(|e| {
        AgentLabError::FileOperation(format!("could not write {}: {}", path.display(), e))
    })?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
        AgentLabError::FileOperation(format!(
            "could not set permissions on {}: {}",
            path.display(),
            e
        ))
    })?;

    info!("Wrote env file to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_key_line_parses() {
        let parsed = crate::env_file::parse_env_str(ENV_TEMPLATE);
        assert_eq!(parsed.skipped_lines, 0);
        assert_eq!(
            parsed.entries,
            vec![("OPENAI_API_KEY".to_string(), String::new())]
        );
    }

    #[test]
    fn test_write_env_file_refuses_to_overwrite() {
        let path = std::env::temp_dir().join("agentlab-template-overwrite.env");
        std::fs::write(&path, "existing").unwrap();

        let result = write_env_file(&path, "sk-test");
        assert!(matches!(result, Err(AgentLabError::FileOperation(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_env_file_fills_in_key() {
        let path = std::env::temp_dir().join("agentlab-template-filled.env");
        let _ = std::fs::remove_file(&path);

        write_env_file(&path, "sk-1234567890abcd").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("OPENAI_API_KEY=sk-1234567890abcd"));

        let _ = std::fs::remove_file(&path);
    }
}
