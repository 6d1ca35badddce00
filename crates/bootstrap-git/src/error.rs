//! Error types for bootstrap-git

/// Result type for bootstrap-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bootstrap-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] bootstrap_fs::Error),

    #[error("Failed to materialize repository '{name}': {source}")]
    Materialize {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn materialize(name: impl Into<String>, source: Error) -> Self {
        Self::Materialize {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
