//! Order API configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! The fault-injection knobs (failure rate, simulated delays) exist so load
//! and chaos tooling can exercise the metrics pipeline; tests disable them.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Default probability that order creation fails with a simulated 500.
pub const DEFAULT_ORDER_FAILURE_RATE: f64 = 0.1;

/// Order API configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:5000").
    pub bind_address: String,

    /// Probability in [0, 1] that order creation returns a simulated 500
    /// before any order is created (default: 0.1).
    pub order_failure_rate: f64,

    /// Whether order endpoints sleep a pseudo-random duration to simulate
    /// processing time (default: true). Disabled in tests.
    pub simulated_delays: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid order failure rate configuration: {0}")]
    InvalidOrderFailureRate(String),

    #[error("Invalid simulated delays configuration: {0}")]
    InvalidSimulatedDelays(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        // Parse order failure rate with validation
        let order_failure_rate = if let Some(value_str) = vars.get("ORDER_FAILURE_RATE") {
            let value: f64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidOrderFailureRate(format!(
                    "ORDER_FAILURE_RATE must be a valid number, got '{}': {}",
                    value_str, e
                ))
            })?;

            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidOrderFailureRate(format!(
                    "ORDER_FAILURE_RATE must be between 0 and 1, got {}",
                    value
                )));
            }

            value
        } else {
            DEFAULT_ORDER_FAILURE_RATE
        };

        // Parse simulated delays toggle
        let simulated_delays = if let Some(value_str) = vars.get("SIMULATED_DELAYS") {
            match value_str.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(ConfigError::InvalidSimulatedDelays(format!(
                        "SIMULATED_DELAYS must be true/false/1/0, got '{}'",
                        other
                    )));
                }
            }
        } else {
            true
        };

        Ok(Config {
            bind_address,
            order_failure_rate,
            simulated_delays,
        })
    }

    /// Configuration suitable for deterministic tests: no simulated delays
    /// and a zero failure rate.
    pub fn for_tests() -> Self {
        Config {
            bind_address: "127.0.0.1:0".to_string(),
            order_failure_rate: 0.0,
            simulated_delays: false,
        }
    }
}
