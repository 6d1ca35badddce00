//! Clone the repositories a manifest pins

use crate::error::Result;
use bootstrap_fs::NormalizedPath;
use bootstrap_git::clone_all;

/// Materialize every repository the manifest names at its pinned commit.
pub fn run_clone_repos(manifest: &str) -> Result<()> {
    clone_all(&NormalizedPath::new(manifest))?;
    Ok(())
}
