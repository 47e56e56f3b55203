//! Pretrained artifact loading.
//!
//! The training pipeline exports a fixed named set of serialized resources
//! (classifier, column schemas, scalers, vocabularies, top-N lists). They are
//! loaded once at startup from the configured models directory, validated for
//! mutual consistency, and shared read-only for the process lifetime. A
//! missing required artifact is fatal; only the rescale-column subset is
//! optional and falls back to a hardcoded list.

pub mod classifier;
pub mod error;
pub mod scaler;
pub mod vectorizer;

#[cfg(any(test, feature = "mock"))]
mod fixture;

#[cfg(any(test, feature = "mock"))]
pub use fixture::FIXTURE_PAIRWISE_COLUMNS;


pub use classifier::LinearClassifier;
pub use error::ArtifactError;
pub use scaler::{ColumnScaler, RangeScaler};
pub use vectorizer::BioVectorizer;

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub const CLASSIFIER_FILE: &str = "match_classifier.json";
pub const USER_FEATURE_COLUMNS_FILE: &str = "user_feature_columns.json";
pub const PAIRWISE_INPUT_COLUMNS_FILE: &str = "pairwise_input_columns.json";
pub const PAIRWISE_SCALER_FILE: &str = "pairwise_scaler.json";
pub const SCALER_AGE_FILE: &str = "scaler_age.json";
pub const SCALER_HEIGHT_FILE: &str = "scaler_height.json";
pub const SCALER_LOCATION_PREFERENCE_FILE: &str = "scaler_location_preference.json";
pub const SCALER_LATITUDE_FILE: &str = "scaler_latitude.json";
pub const SCALER_LONGITUDE_FILE: &str = "scaler_longitude.json";
pub const ONEHOT_CATEGORIES_FILE: &str = "onehot_categories.json";
pub const TOP_JOB_CATEGORIES_FILE: &str = "top_job_categories.json";
pub const TOP_EDUCATION_CATEGORIES_FILE: &str = "top_education_categories.json";
pub const TOP_INTERESTS_FILE: &str = "top_interests.json";
pub const TOP_LANGUAGES_FILE: &str = "top_languages.json";
pub const TOP_PETS_FILE: &str = "top_pets.json";
pub const BIO_VECTORIZER_FILE: &str = "bio_vectorizer.json";
pub const PAIRWISE_SCALE_COLUMNS_FILE: &str = "pairwise_scale_columns.json";

/// Rescale subset used when the optional `pairwise_scale_columns.json`
/// artifact is absent. Boolean orientation flags are deliberately excluded.
pub const FALLBACK_PAIRWISE_SCALE_COLUMNS: &[&str] = &[
    "age_diff",
    "height_diff",
    "geo_distance_km",
    "user1_within_user2_loc_pref",
    "user2_within_user1_loc_pref",
    "drink_match",
    "smoke_match",
    "education_match",
    "interests_jaccard",
    "languages_jaccard",
    "user1_wants_learn_lang",
    "user2_wants_learn_lang",
    "language_interest_match",
    "pets_jaccard",
    "user_features_cosine_sim",
    "user_features_mae_diff",
];

/// Every pretrained resource the scoring pipeline depends on, loaded once.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub classifier: LinearClassifier,
    pub user_feature_columns: Vec<String>,
    pub pairwise_input_columns: Vec<String>,
    pub pairwise_scaler: ColumnScaler,
    pub scaler_age: RangeScaler,
    pub scaler_height: RangeScaler,
    pub scaler_location_preference: RangeScaler,
    pub scaler_latitude: RangeScaler,
    pub scaler_longitude: RangeScaler,
    /// Ordered category vocabulary per low-cardinality attribute.
    pub onehot_categories: HashMap<String, Vec<String>>,
    pub top_job_categories: Vec<String>,
    pub top_education_categories: Vec<String>,
    pub top_interests: Vec<String>,
    pub top_languages: Vec<String>,
    pub top_pets: Vec<String>,
    pub bio_vectorizer: BioVectorizer,
    /// Continuous pairwise columns eligible for rescaling.
    pub pairwise_scale_columns: Vec<String>,
}

impl ArtifactBundle {
    /// Loads and cross-validates the full artifact set from `models_dir`.
    pub fn load(models_dir: &Path) -> Result<Self, ArtifactError> {
        let classifier: LinearClassifier = load_json(models_dir, CLASSIFIER_FILE)?;
        let user_feature_columns: Vec<String> =
            load_json(models_dir, USER_FEATURE_COLUMNS_FILE)?;
        let pairwise_input_columns: Vec<String> =
            load_json(models_dir, PAIRWISE_INPUT_COLUMNS_FILE)?;

        if classifier.n_features() != pairwise_input_columns.len() {
            return Err(ArtifactError::Invalid {
                name: CLASSIFIER_FILE,
                reason: format!(
                    "classifier expects {} features but pairwise schema has {} columns",
                    classifier.n_features(),
                    pairwise_input_columns.len()
                ),
            });
        }

        let pairwise_scale_columns = match load_json::<Vec<String>>(
            models_dir,
            PAIRWISE_SCALE_COLUMNS_FILE,
        ) {
            Ok(columns) => columns,
            Err(ArtifactError::NotFound { .. }) => {
                warn!(
                    artifact = PAIRWISE_SCALE_COLUMNS_FILE,
                    "optional rescale-column artifact absent, using built-in subset"
                );
                FALLBACK_PAIRWISE_SCALE_COLUMNS
                    .iter()
                    .map(|c| c.to_string())
                    .collect()
            }
            Err(e) => return Err(e),
        };

        let bundle = Self {
            classifier,
            user_feature_columns,
            pairwise_input_columns,
            pairwise_scaler: load_json(models_dir, PAIRWISE_SCALER_FILE)?,
            scaler_age: load_json(models_dir, SCALER_AGE_FILE)?,
            scaler_height: load_json(models_dir, SCALER_HEIGHT_FILE)?,
            scaler_location_preference: load_json(
                models_dir,
                SCALER_LOCATION_PREFERENCE_FILE,
            )?,
            scaler_latitude: load_json(models_dir, SCALER_LATITUDE_FILE)?,
            scaler_longitude: load_json(models_dir, SCALER_LONGITUDE_FILE)?,
            onehot_categories: load_json(models_dir, ONEHOT_CATEGORIES_FILE)?,
            top_job_categories: load_json(models_dir, TOP_JOB_CATEGORIES_FILE)?,
            top_education_categories: load_json(models_dir, TOP_EDUCATION_CATEGORIES_FILE)?,
            top_interests: load_json(models_dir, TOP_INTERESTS_FILE)?,
            top_languages: load_json(models_dir, TOP_LANGUAGES_FILE)?,
            top_pets: load_json(models_dir, TOP_PETS_FILE)?,
            bio_vectorizer: load_json(models_dir, BIO_VECTORIZER_FILE)?,
            pairwise_scale_columns,
        };

        info!(
            models_dir = %models_dir.display(),
            user_columns = bundle.user_feature_columns.len(),
            pairwise_columns = bundle.pairwise_input_columns.len(),
            bio_terms = bundle.bio_vectorizer.len(),
            "pretrained artifacts loaded"
        );

        Ok(bundle)
    }
}

fn load_json<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T, ArtifactError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(ArtifactError::NotFound { name, path });
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| ArtifactError::Io { name, source })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Deserialize { name, source })
}
