//! Check that required directories exist

use crate::error::Result;
use bootstrap_fs::NormalizedPath;
use bootstrap_validate::check_dirs_file;

/// Check every directory the document lists.
pub fn run_check_dirs(dirs: &str) -> Result<()> {
    check_dirs_file(&NormalizedPath::new(dirs))?;
    Ok(())
}
