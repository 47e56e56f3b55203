//! Test fixtures for integration tests.
//!
//! Writes a complete, self-consistent artifact set and user records to disk
//! so tests exercise the real loading paths. The classifier mirrors the
//! in-memory fixture bundle: it reads only `language_interest_match`, so a
//! pair where both users want to learn a language scores ~0.7 and any other
//! pair ~0.3.

use std::path::Path;

use serde_json::json;

use amoura::artifacts::{self, FIXTURE_PAIRWISE_COLUMNS};
use amoura::store::mock::sample_record;
use amoura::store::UserRecord;

/// Writes the full artifact set into `dir`.
pub fn write_artifacts(dir: &Path) {
    let base_rate_logit = (0.3f64 / 0.7).ln();
    let mut weights = vec![0.0; FIXTURE_PAIRWISE_COLUMNS.len()];
    let flag_index = FIXTURE_PAIRWISE_COLUMNS
        .iter()
        .position(|c| *c == "language_interest_match")
        .expect("fixture schema includes the language flag");
    weights[flag_index] = -2.0 * base_rate_logit;

    write(
        dir,
        artifacts::CLASSIFIER_FILE,
        json!({ "weights": weights, "intercept": base_rate_logit }),
    );

    write(
        dir,
        artifacts::USER_FEATURE_COLUMNS_FILE,
        json!([
            "age_scaled",
            "height_scaled",
            "sex_male",
            "sex_female",
            "orientation_straight",
            "orientation_homosexual",
            "orientation_bisexual",
            "drink_socially",
            "smoke_no",
            "job_technology",
            "job_other",
            "edu_bachelor",
            "edu_other",
            "dropped_out_school",
            "interested_in_new_language",
            "interest_hiking",
            "interest_movies",
            "lang_english",
            "pet_dog",
            "bio_tfidf_hike",
            "bio_tfidf_movi",
            "loc_pref_is_everywhere",
            "location_preference_km_scaled",
            "latitude_scaled",
            "longitude_scaled"
        ]),
    );

    write(
        dir,
        artifacts::PAIRWISE_INPUT_COLUMNS_FILE,
        json!(FIXTURE_PAIRWISE_COLUMNS),
    );

    let mut ranges = serde_json::Map::new();
    for column in artifacts::FALLBACK_PAIRWISE_SCALE_COLUMNS {
        let (min, max) = match *column {
            "age_diff" => (0.0, 40.0),
            "height_diff" => (0.0, 20.0),
            "geo_distance_km" => (0.0, 10_000.0),
            _ => (0.0, 1.0),
        };
        ranges.insert(
            column.to_string(),
            json!({ "data_min": min, "data_max": max }),
        );
    }
    write(
        dir,
        artifacts::PAIRWISE_SCALER_FILE,
        serde_json::Value::Object(ranges),
    );

    write(
        dir,
        artifacts::SCALER_AGE_FILE,
        json!({ "data_min": 18.0, "data_max": 58.0 }),
    );
    write(
        dir,
        artifacts::SCALER_HEIGHT_FILE,
        json!({ "data_min": 55.0, "data_max": 80.0 }),
    );
    write(
        dir,
        artifacts::SCALER_LOCATION_PREFERENCE_FILE,
        json!({ "data_min": 0.0, "data_max": 100.0 }),
    );
    write(
        dir,
        artifacts::SCALER_LATITUDE_FILE,
        json!({ "data_min": -90.0, "data_max": 90.0 }),
    );
    write(
        dir,
        artifacts::SCALER_LONGITUDE_FILE,
        json!({ "data_min": -180.0, "data_max": 180.0 }),
    );

    write(
        dir,
        artifacts::ONEHOT_CATEGORIES_FILE,
        json!({
            "sex": ["male", "female", "non-binary", "prefer not to say"],
            "orientation": ["straight", "homosexual", "bisexual", "prefer not to say"],
            "body_type": ["average", "slim"],
            "drink": ["socially", "no"],
            "smoke": ["no", "sometimes"]
        }),
    );

    write(
        dir,
        artifacts::TOP_JOB_CATEGORIES_FILE,
        json!(["technology", "healthcare"]),
    );
    write(
        dir,
        artifacts::TOP_EDUCATION_CATEGORIES_FILE,
        json!(["bachelor", "master"]),
    );
    write(
        dir,
        artifacts::TOP_INTERESTS_FILE,
        json!(["hiking", "movies", "cooking"]),
    );
    write(
        dir,
        artifacts::TOP_LANGUAGES_FILE,
        json!(["english", "vietnamese"]),
    );
    write(dir, artifacts::TOP_PETS_FILE, json!(["dog", "cat"]));

    write(
        dir,
        artifacts::BIO_VECTORIZER_FILE,
        json!({ "vocabulary": ["hike", "movi", "cook"], "idf": [1.2, 1.0, 1.4] }),
    );

    write(
        dir,
        artifacts::PAIRWISE_SCALE_COLUMNS_FILE,
        json!(artifacts::FALLBACK_PAIRWISE_SCALE_COLUMNS),
    );
}

/// Writes `record` as a `user_<id>.json` store file into `dir`.
pub fn write_user(dir: &Path, record: &UserRecord) {
    let body = serde_json::to_string_pretty(record).expect("record serializes");
    std::fs::write(dir.join(format!("user_{}.json", record.id)), body).expect("write record");
}

/// Requester: female, straight, wants to learn a language.
pub fn requester(id: i64) -> UserRecord {
    sample_record(id)
}

/// Compatible candidate scoring ~0.7 against [`requester`].
pub fn strong_candidate(id: i64) -> UserRecord {
    let mut record = sample_record(id);
    record.sex = Some("male".to_string());
    record.interested_in_new_language = Some(true);
    record
}

/// Compatible candidate scoring ~0.3 against [`requester`].
pub fn weak_candidate(id: i64) -> UserRecord {
    let mut record = strong_candidate(id);
    record.interested_in_new_language = Some(false);
    record
}

/// Same-sex straight candidate, filtered before scoring.
pub fn incompatible_candidate(id: i64) -> UserRecord {
    let mut record = sample_record(id);
    record.sex = Some("female".to_string());
    record
}

fn write(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), value.to_string()).expect("write artifact");
}
