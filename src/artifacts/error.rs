//! Artifact loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading pretrained artifacts at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// A required artifact file is missing from the models directory.
    #[error("artifact '{name}' not found at {path}")]
    NotFound { name: &'static str, path: PathBuf },

    /// An artifact file could not be read.
    #[error("failed to read artifact '{name}': {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file could not be deserialized.
    #[error("failed to deserialize artifact '{name}': {source}")]
    Deserialize {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Artifacts are mutually inconsistent (wrong training export).
    #[error("invalid artifact '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}
