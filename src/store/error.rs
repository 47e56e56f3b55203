//! Persistence-boundary error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by user-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record file could not be read.
    #[error("failed to read user record at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file exists but could not be deserialized.
    #[error("failed to deserialize user record at {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing store could not serve a lookup.
    #[error("user lookup failed for id {user_id}: {message}")]
    LookupFailed { user_id: i64, message: String },
}
