//! Feature engineering.
//!
//! Raw records flow through [`UserFeatureVectorBuilder`] into schema-aligned
//! per-user vectors; pairs of records and vectors flow through
//! [`PairwiseFeatureBuilder`] into the classifier's pairwise descriptor. The
//! leaf helpers (text normalization, encoders, the orientation predicate,
//! geo distance, jaccard) live in their own submodules.

pub mod compat;
pub mod encode;
pub mod pairwise;
pub mod text;
pub mod user;


pub use compat::{haversine_km, jaccard, orientation_compatible};
pub use pairwise::{cosine_similarity, mean_absolute_difference, PairwiseFeatureBuilder};
pub use text::TextNormalizer;
pub use user::UserFeatureVectorBuilder;

/// Dense vector aligned to an externally supplied ordered column schema.
pub type FeatureVector = Vec<f64>;
