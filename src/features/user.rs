//! Per-user feature vector assembly.

use std::collections::HashMap;
use std::sync::Arc;

use crate::artifacts::ArtifactBundle;
use crate::constants::{
    AGE_FALLBACK, HEIGHT_FALLBACK, LATITUDE_FALLBACK, LONGITUDE_FALLBACK, NO_PREFERENCE_RADIUS,
};
use crate::store::UserRecord;

use super::encode::{encode_multi_value, encode_one_hot, encode_top_n};
use super::text::TextNormalizer;
use super::FeatureVector;

/// Mode defaults substituted for missing low-cardinality attributes before
/// one-hot encoding. Fixed by the training data.
const CATEGORICAL_MODE_DEFAULTS: &[(&str, &str)] = &[
    ("sex", "male"),
    ("orientation", "straight"),
    ("body_type", "average"),
    ("drink", "socially"),
    ("smoke", "no"),
];

/// Builds one user's ordered feature vector against the trained schema.
///
/// Pure: identical records yield identical vectors. Every missing input
/// resolves to a deterministic default, and the final reindex guarantees the
/// output's column set and order exactly match the schema artifact.
#[derive(Debug)]
pub struct UserFeatureVectorBuilder {
    artifacts: Arc<ArtifactBundle>,
    normalizer: TextNormalizer,
}

impl UserFeatureVectorBuilder {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self {
            artifacts,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Assembles the schema-aligned feature vector for `record`.
    pub fn build(&self, record: &UserRecord) -> FeatureVector {
        let mut features = HashMap::new();

        self.add_numeric(&mut features, record);
        self.add_categoricals(&mut features, record);
        self.add_booleans(&mut features, record);
        self.add_multi_value(&mut features, record);
        self.add_bio(&mut features, record);
        self.add_geography(&mut features, record);

        // The single point guaranteeing schema-exactness: absent columns
        // default to 0.0, extra assembly columns are dropped.
        self.artifacts
            .user_feature_columns
            .iter()
            .map(|column| features.get(column).copied().unwrap_or(0.0))
            .collect()
    }

    fn add_numeric(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        let age = record.age().unwrap_or(AGE_FALLBACK);
        let height = record.height.unwrap_or(HEIGHT_FALLBACK);

        features.insert(
            "age_scaled".to_string(),
            self.artifacts.scaler_age.transform(age),
        );
        features.insert(
            "height_scaled".to_string(),
            self.artifacts.scaler_height.transform(height),
        );
    }

    fn add_categoricals(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        for (attribute, mode) in CATEGORICAL_MODE_DEFAULTS {
            let Some(categories) = self.artifacts.onehot_categories.get(*attribute) else {
                continue;
            };

            let raw = match *attribute {
                "sex" => record.sex.as_deref(),
                "orientation" => record.orientation.as_deref(),
                "body_type" => record.body_type.as_deref(),
                "drink" => record.drink.as_deref(),
                "smoke" => record.smoke.as_deref(),
                _ => None,
            };

            encode_one_hot(features, attribute, raw.unwrap_or(mode), categories);
        }

        encode_top_n(
            features,
            "job",
            record.job.as_deref(),
            &self.artifacts.top_job_categories,
        );
        encode_top_n(
            features,
            "edu",
            record.education.as_deref(),
            &self.artifacts.top_education_categories,
        );
    }

    fn add_booleans(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        features.insert(
            "dropped_out_school".to_string(),
            if record.dropped_out_school.unwrap_or(false) { 1.0 } else { 0.0 },
        );
        features.insert(
            "interested_in_new_language".to_string(),
            if record.interested_in_new_language.unwrap_or(false) { 1.0 } else { 0.0 },
        );
    }

    fn add_multi_value(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        encode_multi_value(
            features,
            "interest",
            &record.interests,
            &self.artifacts.top_interests,
        );
        encode_multi_value(
            features,
            "lang",
            &record.languages,
            &self.artifacts.top_languages,
        );
        encode_multi_value(features, "pet", &record.pets, &self.artifacts.top_pets);
    }

    fn add_bio(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        let tokens = self
            .normalizer
            .normalize(record.bio.as_deref().unwrap_or(""));
        let weighted = self.artifacts.bio_vectorizer.transform(&tokens);

        for (i, value) in weighted.into_iter().enumerate() {
            features.insert(self.artifacts.bio_vectorizer.feature_name(i), value);
        }
    }

    fn add_geography(&self, features: &mut HashMap<String, f64>, record: &UserRecord) {
        let radius = record.location_preference.unwrap_or(NO_PREFERENCE_RADIUS);
        let no_preference = radius == NO_PREFERENCE_RADIUS;

        features.insert(
            "loc_pref_is_everywhere".to_string(),
            if no_preference { 1.0 } else { 0.0 },
        );

        let radius_km = if no_preference { 0.0 } else { f64::from(radius) };
        features.insert(
            "location_preference_km_scaled".to_string(),
            self.artifacts.scaler_location_preference.transform(radius_km),
        );

        let latitude = record.latitude.unwrap_or(LATITUDE_FALLBACK);
        let longitude = record.longitude.unwrap_or(LONGITUDE_FALLBACK);

        features.insert(
            "latitude_scaled".to_string(),
            self.artifacts.scaler_latitude.transform(latitude),
        );
        features.insert(
            "longitude_scaled".to_string(),
            self.artifacts.scaler_longitude.transform(longitude),
        );
    }
}
