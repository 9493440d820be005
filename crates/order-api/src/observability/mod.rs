//! Observability module for the Order API.
//!
//! Provides metric definitions, the Prometheus recorder, and host gauge
//! sampling.

pub mod metrics;
