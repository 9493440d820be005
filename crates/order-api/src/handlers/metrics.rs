//! Prometheus metrics endpoint handler.
//!
//! This endpoint is unauthenticated to allow Prometheus to scrape metrics.
//! Only operational data with bounded cardinality labels is exposed.

use axum::{extract::State, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Prometheus text exposition format content type.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Handler for `GET /metrics`.
///
/// Returns Prometheus-formatted metrics for scraping:
/// ```text
/// # TYPE orderapi_http_requests_total counter
/// orderapi_http_requests_total{method="GET",endpoint="/health",status="200"} 42
/// ```
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        handle.render(),
    )
}
