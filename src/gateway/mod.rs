//! HTTP gateway (Axum).
//!
//! One operation is exposed to the transport layer: potential-matches by
//! requester id, plus a liveness probe. Error taxonomy maps onto status
//! classes here and nowhere else.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::potential_matches_handler;
pub use payload::PotentialMatchResponse;
pub use state::HandlerState;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route(
            "/api/v1/users/{user_id}/potential-matches",
            get(potential_matches_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
