//! Pairwise match scoring.
//!
//! [`MatchScorer`] owns the pretrained classifier and every schema/scaler
//! artifact the feature builders need, loaded once at startup and shared
//! read-only. Scoring is stateless and deterministic: two records in, one
//! positive-class probability out.

pub mod error;
pub mod scorer;


pub use error::ScoringError;
pub use scorer::MatchScorer;
