use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use super::error::GatewayError;
use super::payload::PotentialMatchResponse;
use super::state::HandlerState;

/// `GET /api/v1/users/{user_id}/potential-matches`
pub async fn potential_matches_handler(
    State(state): State<HandlerState>,
    Path(user_id): Path<i64>,
) -> Result<Json<PotentialMatchResponse>, GatewayError> {
    let Some(service) = state.service else {
        return Err(GatewayError::ServiceUnavailable(
            "match prediction artifacts are not loaded".to_string(),
        ));
    };

    let potential_match_ids = service.potential_matches(user_id).await?;

    info!(
        user_id,
        matches = potential_match_ids.len(),
        "potential matches served"
    );

    Ok(Json(PotentialMatchResponse {
        user_id,
        potential_match_ids,
    }))
}
