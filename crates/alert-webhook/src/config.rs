//! Alert webhook configuration.
//!
//! Configuration is loaded from environment variables with sensible
//! defaults matching the docker-compose deployment the service ships in.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";

/// Default alert log path.
pub const DEFAULT_ALERT_LOG_PATH: &str = "/var/log/alerts.log";

/// Default name of the API container restarted by remediation.
pub const DEFAULT_API_CONTAINER_NAME: &str = "order-api";

/// Default disk cleanup script path.
pub const DEFAULT_DISK_CLEANUP_SCRIPT: &str = "/app/remediation_scripts/cleanup_disk.sh";

/// Default remediation command timeout in seconds.
pub const DEFAULT_REMEDIATION_TIMEOUT_SECONDS: u64 = 60;

/// Alert webhook configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:5001").
    pub bind_address: String,

    /// Path of the append-only alert log (default: "/var/log/alerts.log").
    pub alert_log_path: PathBuf,

    /// Container restarted by the HighMemoryUsage/AppDown remediations.
    pub api_container_name: String,

    /// Script executed by the HighDiskUsage remediation.
    pub disk_cleanup_script: PathBuf,

    /// Upper bound on any single remediation command (default: 60s).
    /// A hung command would otherwise stall the webhook request forever.
    pub remediation_timeout_seconds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid remediation timeout configuration: {0}")]
    InvalidRemediationTimeout(String),
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

        let alert_log_path = vars
            .get("ALERT_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ALERT_LOG_PATH));

        let api_container_name = vars
            .get("API_CONTAINER_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_CONTAINER_NAME.to_string());

        let disk_cleanup_script = vars
            .get("DISK_CLEANUP_SCRIPT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DISK_CLEANUP_SCRIPT));

        // Parse remediation timeout with validation
        let remediation_timeout_seconds =
            if let Some(value_str) = vars.get("REMEDIATION_TIMEOUT_SECONDS") {
                let value: u64 = value_str.parse().map_err(|e| {
                    ConfigError::InvalidRemediationTimeout(format!(
                        "REMEDIATION_TIMEOUT_SECONDS must be a valid positive integer, got '{}': {}",
                        value_str, e
                    ))
                })?;

                if value == 0 {
                    return Err(ConfigError::InvalidRemediationTimeout(
                        "REMEDIATION_TIMEOUT_SECONDS must be greater than 0".to_string(),
                    ));
                }

                value
            } else {
                DEFAULT_REMEDIATION_TIMEOUT_SECONDS
            };

        Ok(Config {
            bind_address,
            alert_log_path,
            api_container_name,
            disk_cleanup_script,
            remediation_timeout_seconds,
        })
    }
}
