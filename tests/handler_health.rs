mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use booklink::api::handlers::health_handler;

fn app(state: booklink::AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_ok() {
    let dir = tempfile::tempdir().unwrap();
    let (state, _rx) = common::create_test_state(dir.path()).await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert_eq!(body["checks"]["match_queue"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_worker_gone() {
    let dir = tempfile::tempdir().unwrap();
    let (state, rx) = common::create_test_state(dir.path()).await;
    drop(rx);
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["match_queue"]["status"], "error");
}
