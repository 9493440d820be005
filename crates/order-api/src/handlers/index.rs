//! Service descriptor handler.

use crate::models::ServiceInfo;
use axum::Json;
use std::collections::BTreeMap;

/// Handler for `GET /`.
///
/// Returns the service name, version, and a map of the available endpoints
/// so load and chaos tooling can discover what to exercise.
pub async fn index() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("/health", "Health check"),
        ("/metrics", "Prometheus metrics"),
        ("/api/orders", "Order management"),
        ("/api/simulate-error", "Error simulation"),
        ("/api/simulate-slow", "Slow response simulation"),
        ("/api/memory-stress", "Memory stress test"),
    ]);

    Json(ServiceInfo {
        service: "order-api",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_all_endpoints() {
        let Json(info) = index().await;

        assert_eq!(info.service, "order-api");
        assert!(!info.version.is_empty());
        for path in [
            "/health",
            "/metrics",
            "/api/orders",
            "/api/simulate-error",
            "/api/simulate-slow",
            "/api/memory-stress",
        ] {
            assert!(info.endpoints.contains_key(path), "missing {path}");
        }
    }
}
