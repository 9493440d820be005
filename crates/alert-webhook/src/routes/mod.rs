//! Axum router setup.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::alert_log::AlertLog;
use crate::config::Config;
use crate::handlers;
use crate::remediation::Remediator;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub alert_log: AlertLog,
    pub remediator: Arc<dyn Remediator>,
}

/// Builds the service router.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(handlers::handle_alerts))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
