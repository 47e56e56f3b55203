//! End-to-end pipeline tests over real on-disk artifacts and user records.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use amoura::gateway::{create_router_with_state, HandlerState, PotentialMatchResponse};
use amoura::matching::MatchService;
use amoura::scoring::MatchScorer;
use amoura::store::{JsonUserStore, UserStore};

use common::fixtures;

fn build_router(models_dir: &std::path::Path, data_dir: &std::path::Path) -> axum::Router {
    let scorer = MatchScorer::load(models_dir).expect("artifacts load");
    let store = Arc::new(JsonUserStore::new(data_dir.to_path_buf()));
    let service = Arc::new(MatchService::new(store, Arc::new(scorer), 0.5));

    create_router_with_state(HandlerState::new(service))
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("transport-level success");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
        .to_vec();

    (status, body)
}

#[tokio::test]
async fn test_full_pipeline_from_disk() {
    let models = tempfile::tempdir().expect("models dir");
    let data = tempfile::tempdir().expect("data dir");
    fixtures::write_artifacts(models.path());

    fixtures::write_user(data.path(), &fixtures::requester(1));
    fixtures::write_user(data.path(), &fixtures::incompatible_candidate(10));
    fixtures::write_user(data.path(), &fixtures::weak_candidate(11));
    fixtures::write_user(data.path(), &fixtures::strong_candidate(12));

    let router = build_router(models.path(), data.path());
    let (status, body) = get(router, "/api/v1/users/1/potential-matches").await;

    assert_eq!(status, StatusCode::OK);
    let payload: PotentialMatchResponse = serde_json::from_slice(&body).expect("valid payload");
    assert_eq!(payload.user_id, 1);
    assert_eq!(payload.potential_match_ids, vec![12]);
}

#[tokio::test]
async fn test_corrupt_candidate_record_is_skipped() {
    let models = tempfile::tempdir().expect("models dir");
    let data = tempfile::tempdir().expect("data dir");
    fixtures::write_artifacts(models.path());

    fixtures::write_user(data.path(), &fixtures::requester(1));
    fixtures::write_user(data.path(), &fixtures::strong_candidate(2));
    fixtures::write_user(data.path(), &fixtures::strong_candidate(4));

    // Unreadable on disk: dropped from the pool scan, other candidates
    // still evaluated.
    std::fs::write(data.path().join("user_3.json"), "{ not json").expect("write corrupt");

    let router = build_router(models.path(), data.path());
    let (status, body) = get(router, "/api/v1/users/1/potential-matches").await;

    assert_eq!(status, StatusCode::OK);
    let payload: PotentialMatchResponse = serde_json::from_slice(&body).expect("valid payload");
    assert_eq!(payload.potential_match_ids, vec![2, 4]);
}

#[tokio::test]
async fn test_missing_artifact_degrades_to_503() {
    let models = tempfile::tempdir().expect("models dir");
    fixtures::write_artifacts(models.path());
    std::fs::remove_file(models.path().join(amoura::artifacts::CLASSIFIER_FILE))
        .expect("remove classifier");

    // Startup mirrors the binary: load failure leaves the gateway serving 503.
    let state = match MatchScorer::load(models.path()) {
        Ok(_) => panic!("load should fail without a classifier"),
        Err(_) => HandlerState::unavailable(),
    };
    let router = create_router_with_state(state);

    let (status, _) = get(router, "/api/v1/users/1/potential-matches").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // The liveness probe stays green in degraded mode.
    let (health, _) = get(create_router_with_state(HandlerState::unavailable()), "/healthz").await;
    assert_eq!(health, StatusCode::OK);
}

#[tokio::test]
async fn test_store_and_scorer_agree_on_the_snapshot() {
    let models = tempfile::tempdir().expect("models dir");
    let data = tempfile::tempdir().expect("data dir");
    fixtures::write_artifacts(models.path());

    let record = fixtures::strong_candidate(7);
    fixtures::write_user(data.path(), &record);

    let store = JsonUserStore::new(data.path().to_path_buf());
    let loaded = store
        .fetch_user(7)
        .await
        .expect("fetch")
        .expect("record present");

    let scorer = MatchScorer::load(models.path()).expect("artifacts load");
    let direct = scorer
        .predict_match_probability(&fixtures::requester(1), &record)
        .expect("score in-memory record");
    let roundtripped = scorer
        .predict_match_probability(&fixtures::requester(1), &loaded)
        .expect("score loaded record");

    assert_eq!(direct, roundtripped);
}
