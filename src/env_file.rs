//! Env File Loader
//!
//! Parses `.env`-style configuration files (`KEY=VALUE` per line,
//! `#` comments) and binds the pairs into the process environment.
//! Malformed lines are skipped, not errors; the bootstrap treats the
//! file as best-effort input.

use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::AgentLabError;
use crate::types::EnvFileReport;

/// A parsed configuration file: assignments in file order plus the
/// count of lines that could not be parsed.
#[derive(Debug, Default)]
pub struct ParsedEnv {
    pub entries: Vec<(String, String)>,
    pub skipped_lines: usize,
}

/// Parse `KEY=VALUE` lines from a string.
///
/// Blank lines and `#` comments are ignored. An optional `export `
/// prefix is accepted. Values may be wrapped in matching single or
/// double quotes. The last assignment of a key wins, as it would
/// when sourcing the file in a shell. Anything else counts as a
/// skipped line.
pub fn parse_env_str(contents: &str) -> ParsedEnv {
    let mut parsed = ParsedEnv::default();

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            parsed.skipped_lines += 1;
            continue;
        };

        let key = key.trim();
        if !is_valid_key(key) {
            parsed.skipped_lines += 1;
            continue;
        }

        let value = unquote(value.trim()).to_string();

        // Last assignment wins.
        if let Some(entry) = parsed.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            parsed.entries.push((key.to_string(), value));
        }
    }

    parsed
}

/// Load a configuration file and bind its pairs into the process
/// environment.
///
/// Variables already present in the parent environment are left
/// untouched. Returns a report of what was bound and skipped.
pub fn load_env_file(path: &Path) -> Result<EnvFileReport, AgentLabError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AgentLabError::FileOperation(format!("could not read {}: {}", path.display(), e))
    })?;

    let parsed = parse_env_str(&contents);
    if parsed.skipped_lines > 0 {
        debug!(
            "Skipped {} unparseable line(s) in {}",
            parsed.skipped_lines,
            path.display()
        );
    }

    let mut report = EnvFileReport {
        path: path.display().to_string(),
        skipped_lines: parsed.skipped_lines,
        ..Default::default()
    };

    for (key, value) in &parsed.entries {
        if std::env::var_os(key).is_some() {
            report.vars_preexisting += 1;
        } else {
            std::env::set_var(key, value);
            report.vars_set += 1;
        }
    }

    debug!(
        "Loaded {}: {} set, {} already present",
        path.display(),
        report.vars_set,
        report.vars_preexisting
    );
    Ok(report)
}

/// Valid environment variable names: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_key(key: &str) -> bool {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .map(|re| re.is_match(key))
        .unwrap_or(false)
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
