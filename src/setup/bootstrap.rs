//! Environment Bootstrap
//!
//! The core setup sequence: load `.env` into the process
//! environment, ensure the demo dependency, check for the API
//! credential, and print guidance. This path has no failure mode --
//! missing files and keys are normal states with guidance output,
//! and the process always exits 0.

use std::path::Path;

use colored::Colorize;
use tracing::debug;

use crate::config;
use crate::env_file::load_env_file;
use crate::keys::{self, API_KEY_VAR};
use crate::types::{BootstrapReport, KeyStatus};

use super::deps::install_demo_dependency;
use super::guidance::{show_missing_key_guidance, show_next_steps};

/// Run the full bootstrap against the default `.env` location.
pub async fn run_bootstrap() -> BootstrapReport {
    bootstrap_from(&config::env_file_path(), API_KEY_VAR, true).await
}

/// Bootstrap against an explicit env file and credential variable.
///
/// `install_deps` exists so tests can skip the package-manager step.
pub(crate) async fn bootstrap_from(
    env_path: &Path,
    key_var: &str,
    install_deps: bool,
) -> BootstrapReport {
    println!();
    println!("{}", "  Setting up the agent demo environment.".white());
    println!();

    // ---- 1. Load configuration ---------------------------------------------
    println!(
        "{}",
        format!("  [1/3] Loading {}...", env_path.display()).cyan()
    );

    let mut env_loaded = false;
    let mut vars_set = 0;

    if env_path.exists() {
        match load_env_file(env_path) {
            Ok(report) => {
                env_loaded = true;
                vars_set = report.vars_set;
                let mut summary = format!("  Loaded {} variable(s)", report.vars_set);
                if report.vars_preexisting > 0 {
                    summary.push_str(&format!(
                        ", {} already set in the environment",
                        report.vars_preexisting
                    ));
                }
                println!("{}", summary.green());
            }
            Err(e) => {
                // Unreadable file is treated like a missing one.
                debug!("Could not load {}: {}", env_path.display(), e);
                println!(
                    "{}",
                    format!("  Could not read {}, continuing without it", env_path.display())
                        .yellow()
                );
            }
        }
    } else {
        println!(
            "{}",
            format!("  {} not found", env_path.display()).yellow()
        );
    }

    // ---- 2. Demo dependency -------------------------------------------------
    println!("{}", "  [2/3] Ensuring demo dependency...".cyan());
    if install_deps {
        install_demo_dependency();
    }
    println!("{}", "  Done (best-effort)".dimmed());

    // ---- 3. Credential check ------------------------------------------------
    println!(
        "{}",
        format!("  [3/3] Checking for {}...", key_var).cyan()
    );

    let key = keys::key_status_of(key_var);
    match &key {
        KeyStatus::Present { preview } => {
            println!(
                "{}",
                format!("  API key detected: {}", preview).green()
            );
            show_next_steps(preview);
        }
        KeyStatus::Missing => {
            show_missing_key_guidance(env_loaded);
        }
    }

    BootstrapReport {
        env_loaded,
        vars_set,
        key,
    }
}
