//! Order API models.
//!
//! Contains data types used across the Order API service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A created order.
///
/// Orders are append-only: once created they are never mutated or deleted,
/// and they live for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential order id, starting at 1.
    pub id: u64,

    /// Product name.
    pub product: String,

    /// Ordered quantity.
    pub quantity: u32,

    /// Unit price.
    pub price: f64,

    /// Creation time as fractional epoch seconds.
    pub timestamp: f64,
}

/// Request body for `POST /api/orders`.
///
/// All fields are optional; missing fields are defaulted at creation time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub product: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}

impl CreateOrderRequest {
    /// Product name, defaulting to "Unknown".
    pub fn product_or_default(&self) -> String {
        self.product.clone().unwrap_or_else(|| "Unknown".to_string())
    }

    /// Quantity, defaulting to 1.
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Price, defaulting to 0.
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Response for `GET /api/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: usize,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service health status ("healthy").
    pub status: &'static str,

    /// Current time as fractional epoch seconds.
    pub timestamp: f64,

    /// Service name.
    pub service: &'static str,
}

/// Response for `GET /` - service descriptor with endpoint map.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Query parameters for `GET /api/simulate-error`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateErrorQuery {
    /// Error class to simulate: "client", "server" (default), or other.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Query parameters for `GET /api/simulate-slow`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateSlowQuery {
    /// Response delay in seconds (default 2.0).
    pub delay: Option<f64>,
}

/// Query parameters for `GET /api/memory-stress`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryStressQuery {
    /// Allocation size in megabytes (default 100).
    pub size: Option<u64>,
}

/// Response for `GET /api/simulate-slow`.
#[derive(Debug, Clone, Serialize)]
pub struct SlowResponse {
    pub message: String,
}

/// Response for `GET /api/memory-stress`.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryStressResponse {
    pub message: String,

    /// Number of bytes actually allocated.
    pub size: usize,
}
