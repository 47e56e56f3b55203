//! Categorical and multi-value encoders.
//!
//! All encoders write named indicator columns into the assembly map; the
//! final reindex against the trained schema decides which of them survive.

use std::collections::{HashMap, HashSet};

use super::text::{normalize_category, normalize_item, sanitize_feature_name};

/// One-hot encodes a low-cardinality attribute against its pretrained
/// category vocabulary. Unseen values leave every indicator at 0.0.
pub fn encode_one_hot(
    features: &mut HashMap<String, f64>,
    attribute: &str,
    value: &str,
    categories: &[String],
) {
    let normalized = normalize_category(value);

    for category in categories {
        let column = format!("{attribute}_{}", sanitize_feature_name(category));
        let hit = normalize_category(category) == normalized;
        features.insert(column, if hit { 1.0 } else { 0.0 });
    }
}

/// Encodes a high-cardinality attribute against a fixed top-N list plus a
/// trailing explicit `_other` indicator. A missing value lands in `_other`.
pub fn encode_top_n(
    features: &mut HashMap<String, f64>,
    prefix: &str,
    value: Option<&str>,
    top_categories: &[String],
) {
    let normalized = value.map(normalize_category);

    let mut matched = false;
    for category in top_categories {
        let column = format!("{prefix}_{}", sanitize_feature_name(category));
        let hit = normalized.as_deref() == Some(normalize_category(category).as_str());
        matched |= hit;
        features.insert(column, if hit { 1.0 } else { 0.0 });
    }

    features.insert(
        format!("{prefix}_other"),
        if matched { 0.0 } else { 1.0 },
    );
}

/// Emits a binary indicator per top-N vocabulary item for a multi-value
/// attribute. Items outside the vocabulary are silently dropped; there is no
/// "other" bucket.
pub fn encode_multi_value(
    features: &mut HashMap<String, f64>,
    prefix: &str,
    items: &[String],
    vocabulary: &[String],
) {
    let owned = normalized_set(items);

    for vocab_item in vocabulary {
        let column = format!("{prefix}_{}", sanitize_feature_name(vocab_item));
        let hit = owned.contains(normalize_item(vocab_item).as_str());
        features.insert(column, if hit { 1.0 } else { 0.0 });
    }
}

/// Normalized membership set for a multi-value attribute.
pub fn normalized_set(items: &[String]) -> HashSet<String> {
    items
        .iter()
        .map(|item| normalize_item(item))
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_one_hot_marks_single_category() {
        let mut features = HashMap::new();
        encode_one_hot(&mut features, "sex", "Female", &cats(&["male", "female"]));

        assert_eq!(features["sex_male"], 0.0);
        assert_eq!(features["sex_female"], 1.0);
    }

    #[test]
    fn test_one_hot_unseen_value_is_all_zeros() {
        let mut features = HashMap::new();
        encode_one_hot(&mut features, "drink", "constantly", &cats(&["socially", "no"]));

        assert!(features.values().all(|&v| v == 0.0));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_top_n_match_clears_other() {
        let mut features = HashMap::new();
        encode_top_n(
            &mut features,
            "job",
            Some("Technology"),
            &cats(&["technology", "healthcare"]),
        );

        assert_eq!(features["job_technology"], 1.0);
        assert_eq!(features["job_healthcare"], 0.0);
        assert_eq!(features["job_other"], 0.0);
    }

    #[test]
    fn test_top_n_long_tail_sets_other() {
        let mut features = HashMap::new();
        encode_top_n(
            &mut features,
            "job",
            Some("basket weaving"),
            &cats(&["technology", "healthcare"]),
        );

        assert_eq!(features["job_other"], 1.0);
    }

    #[test]
    fn test_top_n_missing_value_sets_other() {
        let mut features = HashMap::new();
        encode_top_n(&mut features, "edu", None, &cats(&["bachelor"]));

        assert_eq!(features["edu_bachelor"], 0.0);
        assert_eq!(features["edu_other"], 1.0);
    }

    #[test]
    fn test_multi_value_membership() {
        let mut features = HashMap::new();
        encode_multi_value(
            &mut features,
            "interest",
            &cats(&[" Hiking ", "knitting"]),
            &cats(&["hiking", "movies"]),
        );

        assert_eq!(features["interest_hiking"], 1.0);
        assert_eq!(features["interest_movies"], 0.0);
        // Non-vocabulary items are dropped without an "other" bucket.
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_normalized_set_dedups_and_trims() {
        let set = normalized_set(&cats(&["Dog", " dog ", "", "Cat"]));
        assert_eq!(set.len(), 2);
        assert!(set.contains("dog"));
        assert!(set.contains("cat"));
    }
}
