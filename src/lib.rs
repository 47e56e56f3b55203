//! Amoura match-prediction library crate (used by the server and
//! integration tests).
//!
//! # Pipeline
//!
//! Raw [`UserRecord`]s are encoded into schema-aligned feature vectors
//! ([`UserFeatureVectorBuilder`]), pairs of vectors and records are derived
//! into a pairwise descriptor ([`PairwiseFeatureBuilder`]), and the
//! pretrained classifier inside [`MatchScorer`] turns the descriptor into a
//! match probability. [`MatchService`] orchestrates a requester against the
//! whole candidate pool.
//!
//! # Process-wide state
//!
//! The classifier and its schema/scaler artifacts ([`ArtifactBundle`]) load
//! once at startup and are shared read-only behind `Arc` — requests never
//! mutate them and never cache derived vectors.
//!
//! # Test/Mock Support
//!
//! [`MockUserStore`] and the fixture artifact bundle are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod artifacts;
pub mod config;
pub mod constants;
pub mod features;
pub mod gateway;
pub mod matching;
pub mod scoring;
pub mod store;

pub use artifacts::{ArtifactBundle, ArtifactError, BioVectorizer, ColumnScaler, LinearClassifier, RangeScaler};
pub use config::{Config, ConfigError};
pub use features::{
    cosine_similarity, haversine_km, jaccard, mean_absolute_difference, orientation_compatible,
    FeatureVector, PairwiseFeatureBuilder, TextNormalizer, UserFeatureVectorBuilder,
};
pub use gateway::{create_router_with_state, GatewayError, HandlerState, PotentialMatchResponse};
pub use matching::{MatchError, MatchService};
pub use scoring::{MatchScorer, ScoringError};
pub use store::{JsonUserStore, StoreError, UserRecord, UserStore};

#[cfg(any(test, feature = "mock"))]
pub use store::MockUserStore;
