//! Pairwise descriptor assembly.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::artifacts::ArtifactBundle;
use crate::constants::NO_PREFERENCE_RADIUS;
use crate::store::UserRecord;

use super::compat::{haversine_km, jaccard, orientation_compatible};
use super::encode::normalized_set;
use super::text::normalize_category;
use super::FeatureVector;

/// Builds the joint descriptor for one (requester, candidate) pair against
/// the trained pairwise schema.
///
/// Assembly never fails: missing inputs fall back to deterministic values,
/// non-finite values collapse to 0.0, and a rescale miss degrades to the
/// unscaled value instead of aborting the pair.
#[derive(Debug)]
pub struct PairwiseFeatureBuilder {
    artifacts: Arc<ArtifactBundle>,
}

impl PairwiseFeatureBuilder {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    /// Assembles the schema-aligned pairwise descriptor.
    ///
    /// `vector_a` and `vector_b` are the schema-aligned feature vectors of
    /// the same two records (§ feature-vector invariant: missing values are
    /// already 0 there).
    pub fn build(
        &self,
        record_a: &UserRecord,
        vector_a: &FeatureVector,
        record_b: &UserRecord,
        vector_b: &FeatureVector,
    ) -> FeatureVector {
        let mut pair = HashMap::new();

        self.add_differences(&mut pair, record_a, record_b);
        self.add_geography(&mut pair, record_a, record_b);
        self.add_orientation(&mut pair, record_a, record_b);
        self.add_habit_matches(&mut pair, record_a, record_b);
        self.add_set_similarity(&mut pair, record_a, record_b);
        self.add_language_interest(&mut pair, record_a, record_b);
        self.add_vector_similarity(&mut pair, vector_a, vector_b);

        self.reindex_and_rescale(&pair)
    }

    fn add_differences(
        &self,
        pair: &mut HashMap<String, f64>,
        a: &UserRecord,
        b: &UserRecord,
    ) {
        let age_a = a.age().unwrap_or(0.0);
        let age_b = b.age().unwrap_or(0.0);
        pair.insert("age_diff".to_string(), (age_a - age_b).abs());

        let height_a = a.height.unwrap_or(0.0);
        let height_b = b.height.unwrap_or(0.0);
        pair.insert("height_diff".to_string(), (height_a - height_b).abs());
    }

    fn add_geography(&self, pair: &mut HashMap<String, f64>, a: &UserRecord, b: &UserRecord) {
        let distance = haversine_km(a.latitude, a.longitude, b.latitude, b.longitude);
        pair.insert("geo_distance_km".to_string(), distance);

        let within = |radius: Option<i32>| {
            let radius = radius.unwrap_or(NO_PREFERENCE_RADIUS);
            radius == NO_PREFERENCE_RADIUS || distance <= f64::from(radius)
        };

        pair.insert(
            "user1_within_user2_loc_pref".to_string(),
            if within(b.location_preference) { 1.0 } else { 0.0 },
        );
        pair.insert(
            "user2_within_user1_loc_pref".to_string(),
            if within(a.location_preference) { 1.0 } else { 0.0 },
        );
    }

    fn add_orientation(&self, pair: &mut HashMap<String, f64>, a: &UserRecord, b: &UserRecord) {
        let forward = orientation_compatible(
            a.sex.as_deref(),
            a.orientation.as_deref(),
            b.sex.as_deref(),
            b.orientation.as_deref(),
        );
        let backward = orientation_compatible(
            b.sex.as_deref(),
            b.orientation.as_deref(),
            a.sex.as_deref(),
            a.orientation.as_deref(),
        );

        pair.insert(
            "orientation_compatible_user1_to_user2".to_string(),
            if forward { 1.0 } else { 0.0 },
        );
        pair.insert(
            "orientation_compatible_user2_to_user1".to_string(),
            if backward { 1.0 } else { 0.0 },
        );
        pair.insert(
            "orientation_compatible_final".to_string(),
            if forward || backward { 1.0 } else { 0.0 },
        );
    }

    fn add_habit_matches(
        &self,
        pair: &mut HashMap<String, f64>,
        a: &UserRecord,
        b: &UserRecord,
    ) {
        let matches = |x: Option<&str>, y: Option<&str>| match (x, y) {
            (Some(x), Some(y)) => normalize_category(x) == normalize_category(y),
            _ => false,
        };

        pair.insert(
            "drink_match".to_string(),
            if matches(a.drink.as_deref(), b.drink.as_deref()) { 1.0 } else { 0.0 },
        );
        pair.insert(
            "smoke_match".to_string(),
            if matches(a.smoke.as_deref(), b.smoke.as_deref()) { 1.0 } else { 0.0 },
        );
        pair.insert(
            "education_match".to_string(),
            if matches(a.education.as_deref(), b.education.as_deref()) { 1.0 } else { 0.0 },
        );
    }

    fn add_set_similarity(
        &self,
        pair: &mut HashMap<String, f64>,
        a: &UserRecord,
        b: &UserRecord,
    ) {
        pair.insert(
            "interests_jaccard".to_string(),
            jaccard(&normalized_set(&a.interests), &normalized_set(&b.interests)),
        );
        pair.insert(
            "languages_jaccard".to_string(),
            jaccard(&normalized_set(&a.languages), &normalized_set(&b.languages)),
        );
        pair.insert(
            "pets_jaccard".to_string(),
            jaccard(&normalized_set(&a.pets), &normalized_set(&b.pets)),
        );
    }

    fn add_language_interest(
        &self,
        pair: &mut HashMap<String, f64>,
        a: &UserRecord,
        b: &UserRecord,
    ) {
        let wants_a = a.interested_in_new_language.unwrap_or(false);
        let wants_b = b.interested_in_new_language.unwrap_or(false);

        pair.insert(
            "user1_wants_learn_lang".to_string(),
            if wants_a { 1.0 } else { 0.0 },
        );
        pair.insert(
            "user2_wants_learn_lang".to_string(),
            if wants_b { 1.0 } else { 0.0 },
        );
        pair.insert(
            "language_interest_match".to_string(),
            if wants_a && wants_b { 1.0 } else { 0.0 },
        );
    }

    fn add_vector_similarity(
        &self,
        pair: &mut HashMap<String, f64>,
        vector_a: &FeatureVector,
        vector_b: &FeatureVector,
    ) {
        pair.insert(
            "user_features_cosine_sim".to_string(),
            cosine_similarity(vector_a, vector_b),
        );
        pair.insert(
            "user_features_mae_diff".to_string(),
            mean_absolute_difference(vector_a, vector_b),
        );
    }

    fn reindex_and_rescale(&self, pair: &HashMap<String, f64>) -> FeatureVector {
        self.artifacts
            .pairwise_input_columns
            .iter()
            .map(|column| {
                let value = pair.get(column).copied().unwrap_or(0.0);
                let value = if value.is_finite() { value } else { 0.0 };

                if !self.artifacts.pairwise_scale_columns.contains(column) {
                    return value;
                }

                match self.artifacts.pairwise_scaler.transform(column, value) {
                    Some(scaled) => scaled,
                    None => {
                        warn!(column = %column, "pairwise rescale unavailable, emitting unscaled value");
                        value
                    }
                }
            })
            .collect()
    }
}

/// Cosine similarity between two aligned vectors; 0.0 when either norm
/// vanishes.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Mean absolute difference between two aligned vectors.
pub fn mean_absolute_difference(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>() / a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_mean_absolute_difference() {
        assert_eq!(mean_absolute_difference(&[1.0, 3.0], &[2.0, 1.0]), 1.5);
        assert_eq!(mean_absolute_difference(&[], &[]), 0.0);
    }
}
