//! Middleware for the Order API.
//!
//! # Components
//!
//! - `http_metrics` - Per-request instrumentation (counts, durations,
//!   errors, in-flight gauge, host gauge re-sampling)
//! - `panic_recovery` - Converts handler panics into generic JSON 500s so
//!   the metrics layer always observes a response

pub mod http_metrics;
pub mod panic_recovery;

pub use http_metrics::http_metrics_middleware;
pub use panic_recovery::panic_response;
