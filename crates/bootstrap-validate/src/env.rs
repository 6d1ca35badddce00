//! Environment consistency checks
//!
//! The project expects to run inside an activated environment-manager
//! prefix (conda by default) whose interpreters shadow the system ones.
//! Ambient state is captured once into an [`EnvSnapshot`]; every check
//! after that is a pure function of the snapshot, so the checks can be
//! tested without touching the process environment.

use crate::{Error, Result};
use bootstrap_fs::NormalizedPath;

/// Names of the ambient things to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvProbe {
    /// Environment variable the manager sets to its active prefix
    pub prefix_var: String,
    /// Interpreter that must always resolve inside the prefix
    pub primary_tool: String,
    /// Interpreter that must resolve inside the prefix only when asked
    pub secondary_tool: String,
}

impl Default for EnvProbe {
    fn default() -> Self {
        Self {
            prefix_var: "CONDA_PREFIX".into(),
            primary_tool: "python".into(),
            secondary_tool: "Rscript".into(),
        }
    }
}

/// Ambient environment state, captured once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Value of the prefix variable, if set
    pub prefix: Option<String>,
    /// Resolved path of the primary tool, if on PATH
    pub primary: Option<NormalizedPath>,
    /// Resolved path of the secondary tool, if on PATH
    pub secondary: Option<NormalizedPath>,
}

impl EnvSnapshot {
    /// Capture the ambient state the probe names.
    pub fn capture(probe: &EnvProbe) -> Self {
        let prefix = std::env::var(&probe.prefix_var).ok();
        let primary = which::which(&probe.primary_tool)
            .ok()
            .map(NormalizedPath::new);
        let secondary = which::which(&probe.secondary_tool)
            .ok()
            .map(NormalizedPath::new);
        tracing::debug!(
            prefix = prefix.as_deref().unwrap_or("<unset>"),
            "Captured environment snapshot"
        );
        Self {
            prefix,
            primary,
            secondary,
        }
    }

    /// Is any environment prefix active at all?
    pub fn is_activated(&self) -> bool {
        self.prefix.is_some()
    }

    /// Does the active prefix match the expected one?
    pub fn matches_expected(&self, expected_prefix: &str) -> bool {
        self.prefix.as_deref() == Some(expected_prefix)
    }

    /// Does the primary tool resolve to `<prefix>/bin/<tool>`?
    pub fn primary_matches(&self, probe: &EnvProbe) -> bool {
        tool_in_prefix(
            self.prefix.as_deref(),
            self.primary.as_ref(),
            &probe.primary_tool,
        )
    }

    /// Does the secondary tool resolve to `<prefix>/bin/<tool>`?
    pub fn secondary_matches(&self, probe: &EnvProbe) -> bool {
        tool_in_prefix(
            self.prefix.as_deref(),
            self.secondary.as_ref(),
            &probe.secondary_tool,
        )
    }
}

fn tool_in_prefix(prefix: Option<&str>, resolved: Option<&NormalizedPath>, tool: &str) -> bool {
    match (prefix, resolved) {
        (Some(prefix), Some(resolved)) => {
            let expected = NormalizedPath::new(prefix).join("bin").join(tool);
            *resolved == expected
        }
        _ => false,
    }
}

/// Assert the snapshot matches expectations.
///
/// The primary interpreter is always required; the secondary only when
/// `require_secondary` is set. The first mismatch wins and its reason
/// names what was expected.
pub fn verify(
    snapshot: &EnvSnapshot,
    probe: &EnvProbe,
    expected_prefix: &str,
    require_secondary: bool,
) -> Result<()> {
    if !snapshot.is_activated() {
        return Err(Error::EnvMismatch {
            reason: format!("project should be running with `{}` set", probe.prefix_var),
        });
    }
    if !snapshot.matches_expected(expected_prefix) {
        return Err(Error::EnvMismatch {
            reason: format!("active environment prefix should be `{expected_prefix}`"),
        });
    }
    if !snapshot.primary_matches(probe) {
        return Err(Error::EnvMismatch {
            reason: format!(
                "`{}` should be present in the active environment",
                probe.primary_tool
            ),
        });
    }
    if require_secondary && !snapshot.secondary_matches(probe) {
        return Err(Error::EnvMismatch {
            reason: format!(
                "`{}` should be present in the active environment",
                probe.secondary_tool
            ),
        });
    }
    Ok(())
}
