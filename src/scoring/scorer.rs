use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::artifacts::ArtifactBundle;
use crate::features::{PairwiseFeatureBuilder, UserFeatureVectorBuilder};
use crate::store::UserRecord;

use super::error::ScoringError;

/// Owns the pretrained classifier and artifacts; scores one pair at a time.
#[derive(Debug)]
pub struct MatchScorer {
    artifacts: Arc<ArtifactBundle>,
    user_builder: UserFeatureVectorBuilder,
    pairwise_builder: PairwiseFeatureBuilder,
}

impl MatchScorer {
    /// Loads every artifact from `models_dir`. Missing or inconsistent
    /// required artifacts are fatal here, before any request is served.
    pub fn load(models_dir: &Path) -> Result<Self, ScoringError> {
        let artifacts = Arc::new(ArtifactBundle::load(models_dir)?);
        Ok(Self::from_bundle(artifacts))
    }

    /// Builds a scorer from an already-loaded bundle.
    pub fn from_bundle(artifacts: Arc<ArtifactBundle>) -> Self {
        Self {
            user_builder: UserFeatureVectorBuilder::new(artifacts.clone()),
            pairwise_builder: PairwiseFeatureBuilder::new(artifacts.clone()),
            artifacts,
        }
    }

    pub fn artifacts(&self) -> &ArtifactBundle {
        &self.artifacts
    }

    /// Probability that `user_a` and `user_b` are a match.
    ///
    /// Builds both per-user vectors, derives the pairwise descriptor, and
    /// evaluates the classifier over the dense row in trained column order.
    pub fn predict_match_probability(
        &self,
        user_a: &UserRecord,
        user_b: &UserRecord,
    ) -> Result<f64, ScoringError> {
        let vector_a = self.user_builder.build(user_a);
        let vector_b = self.user_builder.build(user_b);

        let descriptor = self
            .pairwise_builder
            .build(user_a, &vector_a, user_b, &vector_b);

        let probability = self.artifacts.classifier.predict_positive_proba(&descriptor);

        if !probability.is_finite() {
            return Err(ScoringError::NonFiniteProbability {
                user_a: user_a.id,
                user_b: user_b.id,
            });
        }

        debug!(
            user_a = user_a.id,
            user_b = user_b.id,
            probability,
            "pair scored"
        );

        Ok(probability)
    }
}
