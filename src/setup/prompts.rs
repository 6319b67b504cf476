//! Prompts
//!
//! Interactive terminal prompts for `agentlab --init`.
//! Uses the `dialoguer` crate for input handling.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

/// Prompt the user for an optional value. Returns an empty string
/// when the user just presses Enter.
pub fn prompt_optional(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {} {}", "\u{2192}".cyan(), label.white()))
        .allow_empty(true)
        .interact_text()?;

    Ok(value.trim().to_string())
}
