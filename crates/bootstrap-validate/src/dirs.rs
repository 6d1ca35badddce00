//! Required-directory existence checks

use crate::{Error, Result};
use bootstrap_fs::{DocumentStore, NormalizedPath};

/// Check that every listed path names an existing directory.
///
/// Paths resolve against the current working directory. A path starting
/// with `~` is rejected outright: nothing here expands home shorthand,
/// so such an entry could never match a real directory. The first
/// offending entry of either kind stops the scan.
pub fn check_dirs(dirs: &[String]) -> Result<()> {
    for dir in dirs {
        if dir.starts_with('~') {
            return Err(Error::HomeShorthand { path: dir.clone() });
        }
        if !NormalizedPath::new(dir).is_dir() {
            return Err(Error::NotADirectory { path: dir.clone() });
        }
    }
    Ok(())
}

/// [`check_dirs`] over a document listing the required paths.
///
/// An empty document means no requirements and passes.
pub fn check_dirs_file(path: &NormalizedPath) -> Result<()> {
    let dirs: Vec<String> = DocumentStore::new().load(path)?;
    tracing::debug!(path = %path, dirs = dirs.len(), "Loaded required-directories document");
    check_dirs(&dirs)
}
