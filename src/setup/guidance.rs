//! Guidance Panels
//!
//! The human-readable instructions printed at the end of a bootstrap
//! run: next-step commands when the key is present, file-creation
//! guidance when it is not.

use colored::Colorize;

use crate::config::{ENV_FILENAME, ENV_TEMPLATE_FILENAME};

/// Display the next-steps panel shown when the API key is set.
pub fn show_next_steps(preview: &str) {
    let w = 58;

    let pad = |s: &str| -> String {
        let padding = if s.len() < w { w - s.len() } else { 0 };
        format!("{}{}", s, " ".repeat(padding))
    };

    let border_top = format!("  {}{}{}", "\u{256D}", "\u{2500}".repeat(w), "\u{256E}");
    let border_bot = format!("  {}{}{}", "\u{2570}", "\u{2500}".repeat(w), "\u{256F}");
    let empty_line = format!("  \u{2502}{}\u{2502}", " ".repeat(w));
    let line = |s: &str| format!("  \u{2502}{}\u{2502}", pad(s));

    println!("{}", border_top.cyan());
    println!("{}", line("  Environment ready").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line(&format!("  API key: {}", preview)).cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  Next steps:").cyan());
    println!("{}", line("  1. Check the environment anytime:").cyan());
    println!("{}", line("     agentlab --status").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  2. Run a demo script:").cyan());
    println!("{}", line("     python3 <demo-script>.py").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  3. After editing .env, re-run:").cyan());
    println!("{}", line("     agentlab --setup").cyan());
    println!("{}", border_bot.cyan());
    println!();
}

/// Display instructions for creating the config file and setting the
/// API key. `env_present` switches the first line between "file is
/// missing" and "file has no key".
pub fn show_missing_key_guidance(env_present: bool) {
    println!();
    if env_present {
        println!(
            "{}",
            format!(
                "  {} exists but OPENAI_API_KEY is not set.",
                ENV_FILENAME
            )
            .yellow()
        );
    } else {
        println!(
            "{}",
            format!("  No {} file found.", ENV_FILENAME).yellow()
        );
    }

    println!();
    println!("{}", "  To finish setup:".white());
    println!(
        "{}",
        format!(
            "  1. Create the config file:  agentlab --init  (or: cp {} {})",
            ENV_TEMPLATE_FILENAME, ENV_FILENAME
        )
        .dimmed()
    );
    println!(
        "{}",
        "  2. Add your key:            OPENAI_API_KEY=sk-...".dimmed()
    );
    println!(
        "{}",
        "  3. Re-run the bootstrap:    agentlab --setup".dimmed()
    );
    println!();
}
