//! Health check handler.

use axum::Json;

use crate::models::HealthResponse;

/// Handles `GET /health`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "alert-webhook",
    })
}
