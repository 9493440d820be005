//! HTTP metrics middleware for capturing all request/response metrics.
//!
//! This middleware is the single instrumentation point for the service. It
//! captures metrics for ALL responses, including framework-level errors that
//! occur before handlers run (404 Not Found, 405 Method Not Allowed, JSON
//! parse failures) and panics converted to 500s by the panic-recovery layer
//! beneath it.
//!
//! Per request it records:
//! - request counter labeled by method, endpoint, and status
//! - duration histogram labeled by method and endpoint
//! - error counter (same labels) when the status is >= 400
//! - active-connections gauge, incremented on entry and decremented on exit
//! - host CPU/memory/disk gauges, re-sampled on exit
//!
//! The gauge decrement and host re-sample run from a drop guard, so they
//! happen on every exit path.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::metrics::{
    connection_closed, connection_opened, record_http_request, update_system_gauges,
    UNKNOWN_ENDPOINT,
};

/// Middleware that records HTTP request metrics for all responses.
///
/// The endpoint label is the matched route template (e.g. `/api/orders/:id`),
/// which bounds label cardinality; requests that match no route are labeled
/// with the `"unknown"` sentinel.
///
/// Applied as the outermost layer to capture all responses.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_ENDPOINT.to_string());

    let _connection = ConnectionGuard::open();

    // Execute the request
    let response = next.run(request).await;

    // Record metrics
    let duration = start.elapsed();
    let status_code = response.status().as_u16();
    record_http_request(&method, &endpoint, status_code, duration);

    response
}

/// Scoped in-flight connection marker.
///
/// Increments the active-connections gauge on construction; on drop it
/// decrements the gauge and re-samples the host gauges.
struct ConnectionGuard;

impl ConnectionGuard {
    fn open() -> Self {
        connection_opened();
        ConnectionGuard
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        connection_closed();
        update_system_gauges();
    }
}
