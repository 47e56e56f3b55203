//! Pretrained binary classifier.

use serde::{Deserialize, Serialize};

/// Linear match classifier exported by the training pipeline.
///
/// `weights` is aligned to the pairwise input column schema; the bundle
/// loader verifies the lengths agree before the classifier is ever scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Per-column weights in pairwise schema order.
    pub weights: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
}

impl LinearClassifier {
    /// Number of input features the classifier was trained on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Probability mass of the positive (match) class for one dense row.
    ///
    /// The row must be in trained column order; the caller guarantees the
    /// length matches [`n_features`](Self::n_features).
    pub fn predict_positive_proba(&self, row: &[f64]) -> f64 {
        debug_assert_eq!(row.len(), self.weights.len());

        let z = self
            .weights
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;

        sigmoid(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
