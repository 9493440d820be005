//! HTTP request handlers.

pub mod health;
pub mod webhook;

pub use health::health_check;
pub use webhook::handle_alerts;
