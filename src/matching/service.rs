use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::constants::MATCH_ROLE;
use crate::features::orientation_compatible;
use crate::scoring::MatchScorer;
use crate::store::UserStore;

use super::error::MatchError;

/// Evaluates one requester against the candidate pool.
///
/// Shares the immutable scorer and store across requests; every call is a
/// fresh evaluation with no cached state.
pub struct MatchService {
    store: Arc<dyn UserStore>,
    scorer: Arc<MatchScorer>,
    match_threshold: f64,
}

impl MatchService {
    pub fn new(store: Arc<dyn UserStore>, scorer: Arc<MatchScorer>, match_threshold: f64) -> Self {
        Self {
            store,
            scorer,
            match_threshold,
        }
    }

    pub fn match_threshold(&self) -> f64 {
        self.match_threshold
    }

    /// Ids of candidates whose match probability strictly exceeds the
    /// threshold, in candidate-pool order.
    pub async fn potential_matches(&self, user_id: i64) -> Result<Vec<i64>, MatchError> {
        if user_id <= 0 {
            return Err(MatchError::InvalidUserId(user_id));
        }

        let requester = self
            .store
            .fetch_user(user_id)
            .await?
            .ok_or(MatchError::UserNotFound { user_id })?;

        if requester.role != MATCH_ROLE {
            return Err(MatchError::Forbidden { user_id });
        }

        let pool = self.store.candidate_ids(MATCH_ROLE, user_id).await?;
        if pool.is_empty() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();

        for candidate_id in pool {
            let candidate = match self.store.fetch_user(candidate_id).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    warn!(candidate_id, "candidate record missing, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(candidate_id, error = %e, "candidate fetch failed, skipping");
                    continue;
                }
            };

            // Cheap pre-filter on sex/orientation alone; incompatible pairs
            // never reach the classifier.
            if !orientation_compatible(
                requester.sex.as_deref(),
                requester.orientation.as_deref(),
                candidate.sex.as_deref(),
                candidate.orientation.as_deref(),
            ) {
                debug!(candidate_id, "orientation-incompatible pair, skipping");
                continue;
            }

            match self.scorer.predict_match_probability(&requester, &candidate) {
                Ok(probability) if probability > self.match_threshold => {
                    matches.push(candidate_id);
                }
                Ok(probability) => {
                    debug!(candidate_id, probability, "below match threshold");
                }
                Err(e) => {
                    warn!(candidate_id, error = %e, "scoring failed, skipping candidate");
                }
            }
        }

        info!(
            user_id,
            matches = matches.len(),
            "candidate pool evaluated"
        );

        Ok(matches)
    }
}
