//! Pretrained term-weighting vectorizer for the bio text.

use std::collections::HashMap;

use serde::Deserialize;

use super::error::ArtifactError;
use crate::features::text::sanitize_feature_name;

#[derive(Debug, Deserialize)]
struct BioVectorizerData {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
}

/// Tf-idf vectorizer fitted offline on normalized bios.
///
/// `transform` reproduces the training-side convention: raw term counts
/// weighted by idf, then L2-normalized. Terms outside the fitted vocabulary
/// contribute nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "BioVectorizerData")]
pub struct BioVectorizer {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    term_index: HashMap<String, usize>,
}

impl TryFrom<BioVectorizerData> for BioVectorizer {
    type Error = ArtifactError;

    fn try_from(data: BioVectorizerData) -> Result<Self, Self::Error> {
        Self::new(data.vocabulary, data.idf)
    }
}

impl BioVectorizer {
    /// Builds a vectorizer from an ordered vocabulary and matching idf
    /// weights.
    pub fn new(vocabulary: Vec<String>, idf: Vec<f64>) -> Result<Self, ArtifactError> {
        if vocabulary.len() != idf.len() {
            return Err(ArtifactError::Invalid {
                name: super::BIO_VECTORIZER_FILE,
                reason: format!(
                    "vocabulary has {} terms but idf has {} weights",
                    vocabulary.len(),
                    idf.len()
                ),
            });
        }

        let term_index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            term_index,
        })
    }

    /// Number of vocabulary terms (output width).
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Feature column name for the vocabulary term at `index`.
    pub fn feature_name(&self, index: usize) -> String {
        format!("bio_tfidf_{}", sanitize_feature_name(&self.vocabulary[index]))
    }

    /// Vectorizes normalized tokens into idf-weighted, L2-normalized counts.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut weighted = vec![0.0; self.vocabulary.len()];

        for token in tokens {
            if let Some(&i) = self.term_index.get(token.as_str()) {
                weighted[i] += self.idf[i];
            }
        }

        let norm = weighted.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut weighted {
                *x /= norm;
            }
        }

        weighted
    }
}
