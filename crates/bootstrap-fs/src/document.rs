//! Format-agnostic document loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Format-agnostic document reader.
///
/// Automatically detects format from the file extension and deserializes
/// through serde.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    /// Create a new DocumentStore.
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file.
    ///
    /// Format is detected from file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    ///
    /// A file that exists but holds no document (empty, comments only, or
    /// an explicit null) deserializes to `T::default()`. A missing file is
    /// an error, not an empty document.
    pub fn load<T>(&self, path: &NormalizedPath) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("").to_lowercase();
        if !matches!(extension.as_str(), "yaml" | "yml" | "toml" | "json") {
            return Err(Error::UnsupportedFormat { extension });
        }

        // serde_json rejects zero-byte input outright, so emptiness is
        // decided here, the same way for every format.
        if content.trim().is_empty() {
            return Ok(T::default());
        }

        let parsed: Option<T> = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            "toml" => toml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            _ => serde_json::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
        };

        Ok(parsed.unwrap_or_default())
    }
}
