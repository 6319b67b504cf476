//! Demo Dependencies
//!
//! Best-effort installation of the one external package the demo
//! scripts need. Output is suppressed and failures are ignored; a
//! machine without the package manager still bootstraps cleanly and
//! the demos surface missing packages themselves.

use std::process::{Command, Stdio};

use tracing::debug;

/// The single package the demo scripts depend on.
pub const DEMO_DEPENDENCY: &str = "python-dotenv";

/// Install the demo dependency, silently.
///
/// Never fails: spawn errors and non-zero exits are logged at debug
/// and discarded.
pub fn install_demo_dependency() {
    let result = Command::new("python3")
        .args(["-m", "pip", "install", "--quiet", DEMO_DEPENDENCY])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            debug!("{} is installed", DEMO_DEPENDENCY);
        }
        Ok(status) => {
            debug!(
                "pip install {} exited with {}; continuing",
                DEMO_DEPENDENCY, status
            );
        }
        Err(e) => {
            debug!(
                "could not run pip for {}: {}; continuing",
                DEMO_DEPENDENCY, e
            );
        }
    }
}
