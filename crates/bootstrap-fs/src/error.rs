//! Error types for bootstrap-fs

use std::path::PathBuf;

/// Result type for bootstrap-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse {format} document at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported document format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Attempt to convert a file to a link: {path}")]
    NotALink { path: PathBuf },

    #[error("Attempt to rewrite a link: {path} stores {found}, wanted {expected}")]
    LinkTargetMismatch {
        path: PathBuf,
        found: String,
        expected: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
