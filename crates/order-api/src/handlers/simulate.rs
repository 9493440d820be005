//! Fault-injection handlers.
//!
//! Deterministic simulators used to test the alerting pipeline:
//! error classes, slow responses, and short-lived memory pressure.

use crate::errors::ApiError;
use crate::models::{MemoryStressQuery, MemoryStressResponse, SimulateErrorQuery,
    SimulateSlowQuery, SlowResponse};
use axum::extract::Query;
use axum::Json;
use std::time::Duration;

/// Default delay for the slow simulator, in seconds.
const DEFAULT_SLOW_DELAY_SECONDS: f64 = 2.0;

/// Default allocation for the memory-stress simulator, in megabytes.
const DEFAULT_MEMORY_STRESS_MB: u64 = 100;

/// Handler for `GET /api/simulate-error`.
///
/// Pure branch on the `type` query parameter, no side effects:
/// - `client` → 400
/// - `server` (and omitted) → 500
/// - anything else → 404
#[tracing::instrument(skip_all, name = "orderapi.simulate.error")]
pub async fn simulate_error(Query(query): Query<SimulateErrorQuery>) -> ApiError {
    match query.error_type.as_deref().unwrap_or("server") {
        "client" => ApiError::BadRequest("Bad request simulation".to_string()),
        "server" => ApiError::SimulatedServerError("Internal server error simulation".to_string()),
        _ => ApiError::NotFound("Not found simulation".to_string()),
    }
}

/// Handler for `GET /api/simulate-slow`.
///
/// Sleeps for `delay` seconds (default 2.0) before responding. There is no
/// upper bound; a caller-side timeout is the only limit. Negative,
/// non-finite, or `Duration`-overflowing delays are rejected.
#[tracing::instrument(skip_all, name = "orderapi.simulate.slow")]
pub async fn simulate_slow(
    Query(query): Query<SimulateSlowQuery>,
) -> Result<Json<SlowResponse>, ApiError> {
    let delay = query.delay.unwrap_or(DEFAULT_SLOW_DELAY_SECONDS);

    // try_from rejects negative, NaN, infinite, and overflowing values alike
    let duration = Duration::try_from_secs_f64(delay)
        .map_err(|_| ApiError::BadRequest(format!("Invalid delay: {delay}")))?;

    tokio::time::sleep(duration).await;

    Ok(Json(SlowResponse {
        message: format!("Delayed response after {delay} seconds"),
    }))
}

/// Handler for `GET /api/memory-stress`.
///
/// Allocates a `size`-megabyte buffer (default 100) and reports how many
/// bytes were allocated. The buffer is not retained; it is reclaimed as soon
/// as the handler returns.
#[tracing::instrument(skip_all, name = "orderapi.simulate.memory")]
pub async fn memory_stress(
    Query(query): Query<MemoryStressQuery>,
) -> Result<Json<MemoryStressResponse>, ApiError> {
    let size_mb = query.size.unwrap_or(DEFAULT_MEMORY_STRESS_MB);

    let bytes = size_mb
        .checked_mul(1024 * 1024)
        .and_then(|b| usize::try_from(b).ok())
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid size: {size_mb}")))?;

    let buffer = vec![b'x'; bytes];

    Ok(Json(MemoryStressResponse {
        message: format!("Allocated {size_mb}MB of memory"),
        size: buffer.len(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn error_query(error_type: Option<&str>) -> Query<SimulateErrorQuery> {
        Query(SimulateErrorQuery {
            error_type: error_type.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_simulate_error_client() {
        let error = simulate_error(error_query(Some("client"))).await;
        assert_eq!(error.status_code(), 400);
    }

    #[tokio::test]
    async fn test_simulate_error_server() {
        let error = simulate_error(error_query(Some("server"))).await;
        assert_eq!(error.status_code(), 500);
    }

    #[tokio::test]
    async fn test_simulate_error_other() {
        let error = simulate_error(error_query(Some("timeout"))).await;
        assert_eq!(error.status_code(), 404);
    }

    #[tokio::test]
    async fn test_simulate_error_defaults_to_server() {
        let error = simulate_error(error_query(None)).await;
        assert_eq!(error.status_code(), 500);
    }

    #[tokio::test]
    async fn test_simulate_slow_rejects_negative_delay() {
        let result = simulate_slow(Query(SimulateSlowQuery { delay: Some(-1.0) })).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_simulate_slow_rejects_nan_delay() {
        let result = simulate_slow(Query(SimulateSlowQuery {
            delay: Some(f64::NAN),
        }))
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_simulate_slow_rejects_delay_exceeding_duration_range() {
        // Finite and non-negative, but too large for a Duration
        let result = simulate_slow(Query(SimulateSlowQuery {
            delay: Some(1e300),
        }))
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_simulate_slow_zero_delay_responds() {
        let result = simulate_slow(Query(SimulateSlowQuery { delay: Some(0.0) })).await;

        let Json(response) = result.expect("zero delay should succeed");
        assert_eq!(response.message, "Delayed response after 0 seconds");
    }

    #[tokio::test]
    async fn test_memory_stress_allocates_requested_size() {
        let result = memory_stress(Query(MemoryStressQuery { size: Some(1) })).await;

        let Json(response) = result.expect("1MB allocation should succeed");
        assert_eq!(response.size, 1024 * 1024);
        assert_eq!(response.message, "Allocated 1MB of memory");
    }

    #[tokio::test]
    async fn test_memory_stress_rejects_overflowing_size() {
        let result = memory_stress(Query(MemoryStressQuery {
            size: Some(u64::MAX),
        }))
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
