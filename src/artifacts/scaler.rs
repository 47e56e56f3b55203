//! Pretrained linear rescalers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Min-max range fitted on the training data for one feature.
///
/// Transforms map the fitted range onto `[0, 1]`; values outside the range
/// extrapolate linearly, matching how the training-side scaler behaves on
/// unseen extremes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeScaler {
    pub data_min: f64,
    pub data_max: f64,
}

impl RangeScaler {
    /// Rescales `value` against the fitted range.
    ///
    /// A degenerate range (all training values equal) maps everything to 0.0.
    pub fn transform(&self, value: f64) -> f64 {
        let range = self.data_max - self.data_min;
        if range.abs() < f64::EPSILON {
            return 0.0;
        }
        (value - self.data_min) / range
    }
}

/// Per-column rescaler for the pairwise descriptor's continuous subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnScaler {
    ranges: HashMap<String, RangeScaler>,
}

impl ColumnScaler {
    pub fn new(ranges: HashMap<String, RangeScaler>) -> Self {
        Self { ranges }
    }

    /// Rescales one named column, or `None` if the column was not fitted.
    pub fn transform(&self, column: &str, value: f64) -> Option<f64> {
        self.ranges.get(column).map(|r| r.transform(value))
    }

    pub fn contains(&self, column: &str) -> bool {
        self.ranges.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
