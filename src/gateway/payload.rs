use serde::{Deserialize, Serialize};

/// Response body of the potential-matches endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PotentialMatchResponse {
    pub user_id: i64,
    /// Surviving candidate ids, in candidate-pool order.
    pub potential_match_ids: Vec<i64>,
}
