//! Error types for bootstrap-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from bootstrap-fs
    #[error(transparent)]
    Fs(#[from] bootstrap_fs::Error),

    /// Error from bootstrap-git
    #[error(transparent)]
    Git(#[from] bootstrap_git::Error),

    /// Error from bootstrap-validate
    #[error(transparent)]
    Validate(#[from] bootstrap_validate::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
