//! Panic recovery for request handlers.
//!
//! Handler panics must never tear down a connection silently: the
//! instrumentation layer above needs a response to record, and clients need
//! a well-formed error body. `panic_response` plugs into
//! `tower_http::catch_panic::CatchPanicLayer::custom`, which sits directly
//! beneath the metrics middleware in the router stack. The panic payload is
//! logged server-side; clients only ever see a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

/// Convert a caught handler panic into a generic JSON 500.
///
/// Used with `CatchPanicLayer::custom`. The payload is downcast to a string
/// where possible so the log line carries the original panic message.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(target: "orderapi.panic", panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
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

    #[tokio::test]
    async fn test_string_payload_produces_generic_500() {
        let response = panic_response(Box::new("boom".to_string()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body_json(response.into_body()).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_str_payload_produces_generic_500() {
        let response = panic_response(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body_json(response.into_body()).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_opaque_payload_produces_generic_500() {
        let response = panic_response(Box::new(42_u32));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_body_json(response.into_body()).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
