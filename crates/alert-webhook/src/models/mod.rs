//! Alert webhook models.
//!
//! Alertmanager payload shapes and the JSON-lines log entry format.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alertname used when an alert carries no `alertname` label.
pub const UNKNOWN_ALERTNAME: &str = "Unknown";

/// A single alert from an Alertmanager webhook batch.
///
/// Every field is defaulted so partially-formed alerts are still logged
/// rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alert {
    /// Alert labels; `alertname` selects the remediation action.
    #[serde(default)]
    pub labels: HashMap<String, String>,

    /// Free-form annotations, logged verbatim.
    #[serde(default)]
    pub annotations: HashMap<String, String>,

    /// Alert lifecycle state: "firing" triggers remediation, anything else
    /// is log-only.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "unknown".to_string()
}

impl Alert {
    /// The `alertname` label, or "Unknown" when absent.
    pub fn alertname(&self) -> &str {
        self.labels
            .get("alertname")
            .map_or(UNKNOWN_ALERTNAME, String::as_str)
    }

    /// Whether this alert is in the firing state.
    pub fn is_firing(&self) -> bool {
        self.status == "firing"
    }
}

/// Webhook request body: a batch of alerts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertPayload {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// One line of the append-only alert log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertLogEntry {
    /// ISO-8601 timestamp of receipt.
    pub timestamp: String,

    /// Alert name from the `alertname` label.
    pub alert: String,

    /// Alert lifecycle state at receipt.
    pub status: String,

    /// Labels as received.
    pub labels: HashMap<String, String>,

    /// Annotations as received.
    pub annotations: HashMap<String, String>,
}

impl AlertLogEntry {
    /// Build a log entry for an alert received now.
    pub fn from_alert(alert: &Alert) -> Self {
        AlertLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            alert: alert.alertname().to_string(),
            status: alert.status.clone(),
            labels: alert.labels.clone(),
            annotations: alert.annotations.clone(),
        }
    }
}

/// Webhook success response body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
