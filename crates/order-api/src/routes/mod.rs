//! HTTP routes for the Order API.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::middleware::{http_metrics_middleware, panic_response};
use crate::repositories::OrderRepository;
use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Application state shared across all handlers.
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// In-memory order store.
    pub orders: OrderRepository,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/` - Service descriptor with endpoint map
/// - `/health` - Health check endpoint
/// - `/metrics` - Prometheus metrics endpoint
/// - `/api/orders` - Order listing and creation
/// - `/api/orders/{id}` - Order lookup
/// - `/api/simulate-error`, `/api/simulate-slow`, `/api/memory-stress` -
///   fault-injection endpoints
///
/// Layer order (bottom-to-top execution):
/// 1. CatchPanicLayer - converts handler panics to generic JSON 500s (innermost)
/// 2. TraceLayer - logs request details
/// 3. http_metrics_middleware - records ALL responses, including panics
///    caught below it and unmatched routes (outermost)
///
/// There is deliberately no request timeout layer: the slow simulator must
/// be able to hold a response for an arbitrary caller-chosen delay.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/api/orders/:id", get(handlers::get_order))
        .route("/api/simulate-error", get(handlers::simulate_error))
        .route("/api/simulate-slow", get(handlers::simulate_slow))
        .route("/api/memory-stress", get(handlers::memory_stress))
        .with_state(state);

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    api_routes
        .merge(metrics_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(http_metrics_middleware))
}
