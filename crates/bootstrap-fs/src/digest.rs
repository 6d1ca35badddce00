//! MD5 digest utilities
//!
//! Recorded checksums for project data files are plain md5 hex digests
//! (the `md5sum` output format), so digests here are bare lowercase hex
//! with no algorithm prefix.

use crate::{NormalizedPath, Result, io};
use md5::{Digest, Md5};

/// Compute the MD5 digest of string content, as lowercase hex.
///
/// When `comment` is given, every line that starts with that character is
/// left out of the digest. Lines keep their terminators exactly as
/// written, so without a comment character the result matches `md5sum`
/// output for the same bytes.
pub fn content_md5(content: &str, comment: Option<char>) -> String {
    let mut hasher = Md5::new();
    match comment {
        Some(marker) => {
            for line in content.split_inclusive('\n') {
                if !line.starts_with(marker) {
                    hasher.update(line.as_bytes());
                }
            }
        }
        None => hasher.update(content.as_bytes()),
    }
    format!("{:x}", hasher.finalize())
}

/// [`content_md5`] over a file read as UTF-8 text.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be read as UTF-8.
pub fn file_md5(path: &NormalizedPath, comment: Option<char>) -> Result<String> {
    let content = io::read_text(path)?;
    Ok(content_md5(&content, comment))
}
