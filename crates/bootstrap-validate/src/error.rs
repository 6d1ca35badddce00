//! Error types for bootstrap-validate

/// Result type for bootstrap-validate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-validate operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] bootstrap_fs::Error),

    #[error("Check '{name}' has a malformed expected digest: {value}")]
    InvalidDigest { name: String, value: String },

    #[error("Don't use tilde `~` in required directory paths: {path}")]
    HomeShorthand { path: String },

    #[error("Required directory missing: {path}")]
    NotADirectory { path: String },

    #[error("Environment mismatch: {reason}")]
    EnvMismatch { reason: String },
}
