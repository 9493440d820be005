//! Health check handler.

use crate::models::HealthResponse;
use axum::Json;

/// Handler for `GET /health`.
///
/// Returns the service status with the current wall-clock time. Does not
/// check any dependencies - the service has none.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        service: "order-api",
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_response_fields() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "order-api");
        assert!(response.timestamp > 0.0);
    }
}
