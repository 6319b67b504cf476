//! Env File Initialization
//!
//! Creates `.env` from the embedded template, optionally pre-filled
//! with an API key entered at the prompt. Never overwrites an
//! existing file.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config;

use super::prompts::prompt_optional;
use super::template::{write_env_file, write_env_template};

/// Run the interactive init: create `.env` (and `.env.example` if
/// missing) in the working directory.
pub fn run_init() -> Result<()> {
    let env_path = config::env_file_path();
    let template_path = config::env_template_path();

    write_env_template(&template_path).context("Failed to write env template")?;

    if env_path.exists() {
        println!(
            "{}",
            format!(
                "  {} already exists, not overwriting. Edit it directly.",
                env_path.display()
            )
            .yellow()
        );
        return Ok(());
    }

    println!();
    println!(
        "{}",
        "  Creating .env for the agent demos.".white()
    );
    println!(
        "{}",
        "  Enter your OpenAI API key, or press Enter to fill it in later.".dimmed()
    );
    println!();

    let api_key = prompt_optional("OpenAI API key (sk-...)")?;

    write_env_file(&env_path, &api_key).context("Failed to write .env")?;

    if api_key.is_empty() {
        println!(
            "{}",
            format!(
                "  {} created. Add your key under OPENAI_API_KEY, then run: agentlab --setup",
                env_path.display()
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "  {} created with your key. Run: agentlab --setup",
                env_path.display()
            )
            .green()
        );
    }

    Ok(())
}
