//! HTTP request handlers for the Order API.

pub mod health;
pub mod index;
pub mod metrics;
pub mod orders;
pub mod simulate;

pub use health::health_check;
pub use index::index;
pub use metrics::metrics_handler;
pub use orders::{create_order, get_order, list_orders};
pub use simulate::{memory_stress, simulate_error, simulate_slow};
