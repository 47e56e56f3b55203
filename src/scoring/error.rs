use thiserror::Error;

use crate::artifacts::ArtifactError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Artifact loading failed at construction.
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// The classifier produced a non-finite probability for this pair.
    #[error("classifier produced a non-finite probability for pair ({user_a}, {user_b})")]
    NonFiniteProbability { user_a: i64, user_b: i64 },
}
