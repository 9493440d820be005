//! Alert webhook error types.
//!
//! Both variants map to 500: a payload that fails to parse and a log write
//! that fails are reported identically, as `{"error": "..."}` with status
//! 500, and Alertmanager retries either way. Remediation failures are NOT
//! errors at this level - they are logged and swallowed by the handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Alert webhook error type.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request body was not a valid alert payload.
    #[error("{0}")]
    InvalidPayload(String),

    /// The alert log line could not be written.
    #[error("Failed to write alert log: {0}")]
    AlertLog(String),
}

impl WebhookError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            WebhookError::InvalidPayload(_) | WebhookError::AlertLog(_) => 500,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        if let WebhookError::AlertLog(detail) = &self {
            tracing::error!(target: "webhook.alert_log", error = %detail, "Alert log write failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    async fn read_body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WebhookError::InvalidPayload("bad json".to_string()).status_code(),
            500
        );
        assert_eq!(
            WebhookError::AlertLog("disk full".to_string()).status_code(),
            500
        );
    }

    #[tokio::test]
    async fn test_into_response_invalid_payload() {
        let error = WebhookError::InvalidPayload("expected value at line 1".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"], "expected value at line 1");
    }

    #[tokio::test]
    async fn test_into_response_alert_log() {
        let error = WebhookError::AlertLog("permission denied".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(
            body_json["error"],
            "Failed to write alert log: permission denied"
        );
    }
}
