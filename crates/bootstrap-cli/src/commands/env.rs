//! Check the active environment prefix

use crate::error::Result;
use bootstrap_validate::{EnvProbe, EnvSnapshot, env};

/// Capture the ambient environment and verify it against expectations.
pub fn run_check_env(
    expected_prefix: &str,
    require_secondary: bool,
    env_var: String,
    primary: String,
    secondary: String,
) -> Result<()> {
    let probe = EnvProbe {
        prefix_var: env_var,
        primary_tool: primary,
        secondary_tool: secondary,
    };
    let snapshot = EnvSnapshot::capture(&probe);
    env::verify(&snapshot, &probe, expected_prefix, require_secondary)?;
    Ok(())
}
