//! agentlab CLI
//!
//! The entry point for the demo-environment bootstrap. Handles CLI
//! args, logging setup, and dispatch to setup/init/status.

use clap::Parser;
use colored::Colorize;

use agentlab::config;
use agentlab::keys;
use agentlab::logging::{self, LOG_FILENAME};
use agentlab::setup;
use agentlab::types::{KeyStatus, StatusReport};

const VERSION: &str = "0.1.0";

/// Environment variable selecting the log level.
const LOG_LEVEL_VAR: &str = "AGENTLAB_LOG";

/// agentlab -- Environment bootstrap for AI-agent demos
#[derive(Parser, Debug)]
#[command(
    name = "agentlab",
    version = VERSION,
    about = "Environment bootstrap for local AI-agent demos",
    long_about = "Loads .env configuration, verifies the OpenAI API key, and prints next-step guidance for running the agent demos."
)]
struct Cli {
    /// Bootstrap the demo environment (load .env, check the API key)
    #[arg(long)]
    setup: bool,

    /// Create .env from the bundled template
    #[arg(long)]
    init: bool,

    /// Show current environment status
    #[arg(long)]
    status: bool,

    /// Emit status as JSON (with --status)
    #[arg(long)]
    json: bool,
}

// ---- Status Command ---------------------------------------------------------

/// Display the current environment status.
fn show_status(as_json: bool) {
    let env_path = config::env_file_path();
    let report = StatusReport {
        env_file: env_path.display().to_string(),
        env_file_present: env_path.exists(),
        key: keys::key_status(),
        logs_dir: config::log_dir().display().to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
    };

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize status: {}", e),
        }
        return;
    }

    let env_line = if report.env_file_present {
        format!("{} (present)", report.env_file)
    } else {
        format!("{} (missing)", report.env_file)
    };
    let key_line = match &report.key {
        KeyStatus::Present { preview } => preview.clone(),
        KeyStatus::Missing => "not set".to_string(),
    };

    println!(
        r#"
=== AGENTLAB STATUS ===
Env file:   {}
API key:    {}
Logs dir:   {}
Checked:    {}
=======================
"#,
        env_line, key_line, report.logs_dir, report.checked_at,
    );
}

// ---- Entry Point -----------------------------------------------------------

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());
    let log_path = config::log_dir().join(LOG_FILENAME);
    if let Err(e) = logging::init_logging(&level, Some(&log_path)) {
        eprintln!("Warning: {}. Falling back to info.", e);
        let _ = logging::init_logging("info", Some(&log_path));
    }

    if cli.init {
        if let Err(e) = setup::init::run_init() {
            eprintln!("Init failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if cli.status {
        show_status(cli.json);
        return;
    }

    if cli.setup {
        // The bootstrap has no failure path: every branch ends in
        // guidance output and exit code 0.
        setup::bootstrap::run_bootstrap().await;
        return;
    }

    // Default: show usage hints.
    println!("{}", "Run \"agentlab --setup\" to bootstrap the demo environment.".white());
    println!("{}", "Run \"agentlab --help\" for all options.".dimmed());
}
