//! Order API Service Library
//!
//! This library provides a synthetic-workload HTTP API used to exercise a
//! Prometheus-based alerting pipeline:
//!
//! - Order CRUD over an in-memory store (create, list, lookup)
//! - Fault injection (error, latency, and memory-pressure simulators)
//! - Per-request instrumentation (counts, durations, errors, in-flight gauge)
//! - Host CPU/memory/disk gauges re-sampled on every request
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> middleware/*.rs -> handlers/*.rs -> repositories/*.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - Request instrumentation and panic recovery
//! - `models` - Data models
//! - `observability` - Metric definitions and the Prometheus recorder
//! - `repositories` - In-memory order storage
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
