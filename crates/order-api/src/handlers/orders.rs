//! Order handlers.
//!
//! Create, list, and look up orders against the in-memory repository. The
//! endpoints inject pseudo-random processing delays and an occasional
//! simulated creation failure so external load tooling can exercise the
//! latency and error alerting paths; both behaviors are driven by `Config`.

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{CreateOrderRequest, Order, OrderListResponse};
use crate::observability::metrics::record_order_created;
use crate::routes::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rand::Rng;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Handler for `POST /api/orders`.
///
/// Sleeps a pseudo-random duration in [0.2s, 0.8s], then with probability
/// `order_failure_rate` fails with a 500 before any order is created.
/// Otherwise appends the order and returns 201 with the created body.
/// A malformed or missing JSON body is a 400.
#[tracing::instrument(skip_all, name = "orderapi.orders.create")]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected order payload");
        ApiError::BadRequest("Invalid order data".to_string())
    })?;

    simulate_processing_delay(&state.config, 0.2..0.8).await;

    // Simulated failure path: no partial order is created here.
    if simulated_failure(state.config.order_failure_rate) {
        warn!("Simulated order processing failure");
        return Err(ApiError::OrderProcessing);
    }

    let order = state.orders.create(
        request.product_or_default(),
        request.quantity_or_default(),
        request.price_or_default(),
    );
    record_order_created();

    info!(order_id = order.id, product = %order.product, "Order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Handler for `GET /api/orders`.
///
/// Sleeps a pseudo-random duration in [0.1s, 0.5s], then returns every
/// order together with the total count.
#[tracing::instrument(skip_all, name = "orderapi.orders.list")]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<OrderListResponse> {
    simulate_processing_delay(&state.config, 0.1..0.5).await;

    let orders = state.orders.list();
    let total = orders.len();

    Json(OrderListResponse { orders, total })
}

/// Handler for `GET /api/orders/{id}`.
///
/// Sleeps a pseudo-random duration in [0.05s, 0.3s], then returns the order
/// or a 404 if no order has the given id.
#[tracing::instrument(skip_all, name = "orderapi.orders.get")]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, ApiError> {
    simulate_processing_delay(&state.config, 0.05..0.3).await;

    state
        .orders
        .get(order_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))
}

/// Sleep a pseudo-random duration from `range` seconds, unless simulated
/// delays are disabled (tests).
async fn simulate_processing_delay(config: &Config, range: Range<f64>) {
    if !config.simulated_delays {
        return;
    }

    let seconds = rand::thread_rng().gen_range(range);
    tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
}

/// Roll the simulated-failure dice. A rate of 0 never fails, 1 always fails.
fn simulated_failure(rate: f64) -> bool {
    rate > 0.0 && rand::thread_rng().gen_bool(rate.clamp(0.0, 1.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_failure_boundaries() {
        for _ in 0..100 {
            assert!(!simulated_failure(0.0));
            assert!(simulated_failure(1.0));
        }
    }

    #[tokio::test]
    async fn test_simulate_processing_delay_disabled_is_immediate() {
        let config = Config::for_tests();

        let start = std::time::Instant::now();
        simulate_processing_delay(&config, 0.2..0.8).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
