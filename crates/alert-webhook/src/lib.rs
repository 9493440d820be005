//! Alert Webhook Service Library
//!
//! This library provides the Alertmanager webhook receiver that pairs with
//! the order API:
//!
//! - Accepts alert batches on `POST /webhook`
//! - Appends one JSON line per alert to a shared log file
//! - Dispatches firing alerts to remediation commands via a fixed
//!   alertname-to-action table
//!
//! Remediation outcomes are logged but never surface to the webhook caller;
//! the batch is accepted as long as the payload parses and the log line is
//! written.
//!
//! # Modules
//!
//! - `alert_log` - Append-only JSON-lines alert log
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `models` - Alert payload and log-entry types
//! - `remediation` - Alertname-to-action table and command execution
//! - `routes` - Axum router setup

pub mod alert_log;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod remediation;
pub mod routes;
