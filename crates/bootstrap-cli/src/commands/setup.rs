//! Delegate to the project's setup routine

use crate::error::{CliError, Result};
use std::process::Command;

/// Run the setup script, inheriting its stdio.
///
/// The script owns the whole setup story; this wrapper only relays its
/// outcome. A non-zero status becomes an error naming the script.
pub fn run_setup(script: &str) -> Result<()> {
    tracing::debug!(script, "Running setup script");
    let status = Command::new(script).status()?;
    if !status.success() {
        let detail = match status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "was terminated by a signal".to_string(),
        };
        return Err(CliError::user(format!("setup script `{script}` {detail}")));
    }
    Ok(())
}
