//! Fault-injection endpoint integration tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use order_api::config::Config;
use order_api::repositories::OrderRepository;
use order_api::routes::{build_routes, AppState};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = Arc::new(AppState {
        config: Config::for_tests(),
        orders: OrderRepository::new(),
    });

    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();

    build_routes(state, handle)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builder should succeed")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_simulate_error_client_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/simulate-error?type=client"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Bad request simulation");
}

#[tokio::test]
async fn test_simulate_error_server_returns_500() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/simulate-error?type=server"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error simulation");
}

#[tokio::test]
async fn test_simulate_error_other_returns_404() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/simulate-error?type=anything-else"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found simulation");
}

#[tokio::test]
async fn test_simulate_error_omitted_type_defaults_to_server() {
    let app = test_app();

    let response = app.oneshot(get("/api/simulate-error")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_simulate_slow_waits_for_requested_delay() {
    let app = test_app();

    let start = Instant::now();
    let response = app
        .oneshot(get("/api/simulate-slow?delay=0.2"))
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        elapsed.as_secs_f64() >= 0.2,
        "response arrived after {elapsed:?}, expected >= 200ms"
    );
    let body = body_json(response).await;
    assert_eq!(body["message"], "Delayed response after 0.2 seconds");
}

#[tokio::test]
async fn test_simulate_slow_rejects_negative_delay() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/simulate-slow?delay=-5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_simulate_slow_rejects_huge_delay_as_client_error() {
    let app = test_app();

    // Parses as a finite f64 but cannot be represented as a Duration;
    // must be a 400, not a panic surfaced as a 500.
    let response = app
        .oneshot(get("/api/simulate-slow?delay=1e300"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid delay: 1e300");
}

#[tokio::test]
async fn test_memory_stress_reports_allocated_bytes() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/memory-stress?size=2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["size"], 2 * 1024 * 1024);
    assert_eq!(body["message"], "Allocated 2MB of memory");
}

#[tokio::test]
async fn test_memory_stress_non_numeric_size_is_client_error() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/memory-stress?size=lots"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
