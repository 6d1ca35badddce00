//! File reading helpers

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::io::ErrorKind;

/// Read a file as UTF-8 text.
///
/// A missing file maps to [`Error::NotFound`]; every other failure keeps
/// its I/O context.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound { path: native.clone() },
        _ => Error::io(&native, e),
    })
}
