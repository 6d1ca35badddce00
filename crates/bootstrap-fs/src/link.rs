//! Relative symlink creation

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Create a symbolic link at `link` pointing to `target`.
///
/// The stored link target is made relative to the link's parent
/// directory, and any missing directories on the way to `link` are
/// created. Calling this again with the same arguments is a no-op.
///
/// # Errors
///
/// - [`Error::NotFound`] if `target` does not exist
/// - [`Error::NotALink`] if something that is not a symlink already
///   occupies `link`
/// - [`Error::LinkTargetMismatch`] if `link` is a symlink storing a
///   different target
pub fn link_relative(target: &NormalizedPath, link: &NormalizedPath) -> Result<()> {
    if !target.exists() {
        return Err(Error::NotFound {
            path: target.to_native(),
        });
    }

    let parent = link
        .parent()
        .unwrap_or_else(|| NormalizedPath::new("."));

    // The lexical diff needs both sides anchored the same way
    let relative_target = if target.is_absolute() == parent.is_absolute() {
        target.relative_to(&parent)
    } else {
        absolutize(target)?.relative_to(&absolutize(&parent)?)
    };

    let link_native = link.to_native();
    // symlink_metadata also sees dangling links that exists() misses
    if let Ok(meta) = fs::symlink_metadata(&link_native) {
        if !meta.file_type().is_symlink() {
            return Err(Error::NotALink { path: link_native });
        }
        let found = fs::read_link(&link_native).map_err(|e| Error::io(&link_native, e))?;
        let found = NormalizedPath::new(found);
        if found != relative_target {
            return Err(Error::LinkTargetMismatch {
                path: link_native,
                found: found.as_str().to_string(),
                expected: relative_target.as_str().to_string(),
            });
        }
        return Ok(());
    }

    if let Some(dir) = link.parent() {
        let dir_native = dir.to_native();
        fs::create_dir_all(&dir_native).map_err(|e| Error::io(&dir_native, e))?;
    }

    symlink(&relative_target.to_native(), &link_native, target.is_dir())
        .map_err(|e| Error::io(&link_native, e))?;
    tracing::debug!(stored = %relative_target, link = %link, "Created relative symlink");
    Ok(())
}

/// Resolve a path against the current working directory if relative.
fn absolutize(path: &NormalizedPath) -> Result<NormalizedPath> {
    if path.is_absolute() {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir().map_err(|e| Error::io(path.to_native(), e))?;
    Ok(NormalizedPath::new(cwd).join(path.as_str()))
}

#[cfg(unix)]
fn symlink(relative_target: &Path, link: &Path, _target_is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(relative_target, link)
}

#[cfg(windows)]
fn symlink(relative_target: &Path, link: &Path, target_is_dir: bool) -> io::Result<()> {
    if target_is_dir {
        std::os::windows::fs::symlink_dir(relative_target, link)
    } else {
        std::os::windows::fs::symlink_file(relative_target, link)
    }
}
