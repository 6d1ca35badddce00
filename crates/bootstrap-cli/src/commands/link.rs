//! Create a relative symlink

use crate::error::Result;
use bootstrap_fs::{NormalizedPath, link_relative};

/// Link `link` to `target`, storing a relative link target.
pub fn run_link(target: &str, link: &str) -> Result<()> {
    link_relative(&NormalizedPath::new(target), &NormalizedPath::new(link))?;
    Ok(())
}
