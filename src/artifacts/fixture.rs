//! In-memory artifact bundle for tests.

use std::collections::HashMap;

use super::{
    ArtifactBundle, BioVectorizer, ColumnScaler, LinearClassifier, RangeScaler,
    FALLBACK_PAIRWISE_SCALE_COLUMNS,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Pairwise schema used by the fixture bundle, in trained order.
pub const FIXTURE_PAIRWISE_COLUMNS: &[&str] = &[
    "age_diff",
    "height_diff",
    "geo_distance_km",
    "user1_within_user2_loc_pref",
    "user2_within_user1_loc_pref",
    "orientation_compatible_user1_to_user2",
    "orientation_compatible_user2_to_user1",
    "orientation_compatible_final",
    "drink_match",
    "smoke_match",
    "education_match",
    "interests_jaccard",
    "languages_jaccard",
    "pets_jaccard",
    "user1_wants_learn_lang",
    "user2_wants_learn_lang",
    "language_interest_match",
    "user_features_cosine_sim",
    "user_features_mae_diff",
];

impl ArtifactBundle {
    /// A complete, self-consistent bundle for tests.
    ///
    /// The classifier reads only `language_interest_match`: a pair where both
    /// users want to learn a language scores ~0.7, any other pair ~0.3. All
    /// other weights are zero, so the remaining columns exercise assembly and
    /// rescaling without moving the probability.
    pub fn fixture() -> Self {
        let pairwise_input_columns = strings(FIXTURE_PAIRWISE_COLUMNS);

        let base_rate_logit = (0.3f64 / 0.7).ln();
        let mut weights = vec![0.0; pairwise_input_columns.len()];
        let flag_index = pairwise_input_columns
            .iter()
            .position(|c| c == "language_interest_match")
            .expect("fixture schema includes the language flag");
        weights[flag_index] = -2.0 * base_rate_logit;

        let user_feature_columns = strings(&[
            "age_scaled",
            "height_scaled",
            "sex_male",
            "sex_female",
            "sex_non_binary",
            "sex_prefer_not_to_say",
            "orientation_straight",
            "orientation_homosexual",
            "orientation_bisexual",
            "orientation_prefer_not_to_say",
            "body_type_average",
            "body_type_slim",
            "drink_socially",
            "drink_no",
            "smoke_no",
            "smoke_sometimes",
            "job_technology",
            "job_healthcare",
            "job_other",
            "edu_bachelor",
            "edu_master",
            "edu_other",
            "dropped_out_school",
            "interested_in_new_language",
            "interest_hiking",
            "interest_movies",
            "interest_cooking",
            "lang_english",
            "lang_vietnamese",
            "pet_dog",
            "pet_cat",
            "bio_tfidf_hike",
            "bio_tfidf_movi",
            "bio_tfidf_cook",
            "loc_pref_is_everywhere",
            "location_preference_km_scaled",
            "latitude_scaled",
            "longitude_scaled",
        ]);

        let mut ranges = HashMap::new();
        for column in FALLBACK_PAIRWISE_SCALE_COLUMNS {
            let range = match *column {
                "age_diff" => RangeScaler { data_min: 0.0, data_max: 40.0 },
                "height_diff" => RangeScaler { data_min: 0.0, data_max: 20.0 },
                "geo_distance_km" => RangeScaler { data_min: 0.0, data_max: 10_000.0 },
                _ => RangeScaler { data_min: 0.0, data_max: 1.0 },
            };
            ranges.insert(column.to_string(), range);
        }

        let onehot_categories = HashMap::from([
            (
                "sex".to_string(),
                strings(&["male", "female", "non-binary", "prefer not to say"]),
            ),
            (
                "orientation".to_string(),
                strings(&["straight", "homosexual", "bisexual", "prefer not to say"]),
            ),
            ("body_type".to_string(), strings(&["average", "slim"])),
            ("drink".to_string(), strings(&["socially", "no"])),
            ("smoke".to_string(), strings(&["no", "sometimes"])),
        ]);

        Self {
            classifier: LinearClassifier {
                weights,
                intercept: base_rate_logit,
            },
            user_feature_columns,
            pairwise_input_columns,
            pairwise_scaler: ColumnScaler::new(ranges),
            scaler_age: RangeScaler { data_min: 18.0, data_max: 58.0 },
            scaler_height: RangeScaler { data_min: 55.0, data_max: 80.0 },
            scaler_location_preference: RangeScaler { data_min: 0.0, data_max: 100.0 },
            scaler_latitude: RangeScaler { data_min: -90.0, data_max: 90.0 },
            scaler_longitude: RangeScaler { data_min: -180.0, data_max: 180.0 },
            onehot_categories,
            top_job_categories: strings(&["technology", "healthcare"]),
            top_education_categories: strings(&["bachelor", "master"]),
            top_interests: strings(&["hiking", "movies", "cooking"]),
            top_languages: strings(&["english", "vietnamese"]),
            top_pets: strings(&["dog", "cat"]),
            bio_vectorizer: BioVectorizer::new(
                strings(&["hike", "movi", "cook"]),
                vec![1.2, 1.0, 1.4],
            )
            .expect("fixture vectorizer is consistent"),
            pairwise_scale_columns: strings(FALLBACK_PAIRWISE_SCALE_COLUMNS),
        }
    }
}
