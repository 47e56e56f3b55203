//! Free-text normalization for the bio pipeline.
//!
//! The transform must stay byte-for-byte compatible with the one used to fit
//! the bio vectorizer artifact: case-fold, transliterate to ASCII, strip
//! punctuation and digits, drop stopwords and one-character tokens, stem.

use deunicode::deunicode;
use rust_stemmers::{Algorithm, Stemmer};

/// English stopwords removed before vectorization.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don",
    "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has", "hasn",
    "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m", "ma",
    "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not", "now",
    "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some", "such",
    "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Normalizes free text into the token stream the bio vectorizer was fitted on.
pub struct TextNormalizer {
    stemmer: Stemmer,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer").finish_non_exhaustive()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Tokenizes and normalizes `text`.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let ascii = deunicode(&text.to_lowercase());

        let cleaned: String = ascii
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.len() > 1 && !STOP_WORDS.contains(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect()
    }
}

/// Sanitizes an arbitrary label into a feature column name fragment:
/// ASCII transliteration, case-fold, non-alphanumeric runs collapsed to `_`.
pub fn sanitize_feature_name(raw: &str) -> String {
    let ascii = deunicode(&raw.to_lowercase());

    let mut name = String::with_capacity(ascii.len());
    let mut last_was_separator = true;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            name.push('_');
            last_was_separator = true;
        }
    }

    if name.ends_with('_') {
        name.pop();
    }

    name
}

/// Normalizes a categorical value for comparison: trim and case-fold.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes a multi-value item for set membership: trim, case-fold,
/// transliterate to ASCII.
pub fn normalize_item(raw: &str) -> String {
    deunicode(raw.trim().to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_digits() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.normalize("I love hiking, movies & 90s music!");

        assert!(!tokens.iter().any(|t| t.contains(|c: char| !c.is_ascii_alphabetic())));
        assert!(!tokens.contains(&"90s".to_string()));
    }

    #[test]
    fn test_normalize_drops_stopwords_and_short_tokens() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.normalize("I am a fan of the outdoors");

        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"i".to_string()));
        assert!(tokens.contains(&"fan".to_string()));
    }

    #[test]
    fn test_normalize_stems_tokens() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.normalize("hiking cooking movies");

        assert_eq!(tokens, vec!["hike", "cook", "movi"]);
    }

    #[test]
    fn test_normalize_transliterates_diacritics() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.normalize("café culture");

        assert_eq!(tokens[0], "cafe");
    }

    #[test]
    fn test_sanitize_feature_name() {
        assert_eq!(sanitize_feature_name("Health Care / Medical"), "health_care_medical");
        assert_eq!(sanitize_feature_name("prefer not to say"), "prefer_not_to_say");
        assert_eq!(sanitize_feature_name("Ph.D."), "ph_d");
    }

    #[test]
    fn test_normalize_item() {
        assert_eq!(normalize_item("  Đà Lạt  "), "da lat");
        assert_eq!(normalize_item("Dog"), "dog");
    }
}
