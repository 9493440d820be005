//! Order API error types.
//!
//! All errors map to appropriate HTTP status codes via the `IntoResponse`
//! impl and serialize as a flat `{"error": "..."}` body, which is the wire
//! format the load-testing and alerting tooling expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Order API error type.
///
/// Maps to appropriate HTTP status codes:
/// - BadRequest: 400 Bad Request
/// - NotFound: 404 Not Found
/// - OrderProcessing, SimulatedServerError: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Simulated order-creation failure. No order is created on this path.
    #[error("Order processing failed")]
    OrderProcessing,

    /// Deterministic 500 from the error simulator.
    #[error("{0}")]
    SimulatedServerError(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::OrderProcessing | ApiError::SimulatedServerError(_) => 500,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::OrderProcessing | ApiError::SimulatedServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
