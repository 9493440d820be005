//! Alertname-to-action table and remediation command execution.
//!
//! Firing alerts are matched against a fixed table of known alert names.
//! Matched alerts run a host-side command (container restart or cleanup
//! script) through the `Remediator` trait; the trait seam lets tests swap
//! in a recorder instead of spawning processes.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

use crate::config::Config;

/// Remediation selected for a firing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationAction {
    /// Restart the API container (`docker restart <name>`).
    RestartApiContainer,
    /// Run the disk cleanup script (`bash <script>`).
    RunDiskCleanup,
}

impl RemediationAction {
    /// Look up the action for an alert name. Unknown names get no action.
    pub fn for_alert(alertname: &str) -> Option<Self> {
        match alertname {
            "HighMemoryUsage" | "AppDown" => Some(RemediationAction::RestartApiContainer),
            "HighDiskUsage" => Some(RemediationAction::RunDiskCleanup),
            _ => None,
        }
    }
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemediationAction::RestartApiContainer => write!(f, "restart API container"),
            RemediationAction::RunDiskCleanup => write!(f, "run disk cleanup"),
        }
    }
}

/// Remediation command failure.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// The command could not be spawned.
    #[error("Failed to spawn remediation command: {0}")]
    Spawn(String),

    /// The command ran but exited non-zero.
    #[error("Remediation command failed with status {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    /// The command exceeded the configured timeout.
    #[error("Remediation command timed out after {0} seconds")]
    Timeout(u64),
}

/// Executes remediation actions.
#[async_trait]
pub trait Remediator: Send + Sync {
    async fn execute(&self, action: RemediationAction) -> Result<(), RemediationError>;
}

/// Remediator that shells out to host commands.
pub struct CommandRemediator {
    container_name: String,
    cleanup_script: PathBuf,
    timeout_seconds: u64,
}

impl CommandRemediator {
    pub fn new(config: &Config) -> Self {
        CommandRemediator {
            container_name: config.api_container_name.clone(),
            cleanup_script: config.disk_cleanup_script.clone(),
            timeout_seconds: config.remediation_timeout_seconds,
        }
    }

    fn command_for(&self, action: RemediationAction) -> Command {
        match action {
            RemediationAction::RestartApiContainer => {
                let mut command = Command::new("docker");
                command.arg("restart").arg(&self.container_name);
                command
            }
            RemediationAction::RunDiskCleanup => {
                let mut command = Command::new("bash");
                command.arg(&self.cleanup_script);
                command
            }
        }
    }
}

#[async_trait]
impl Remediator for CommandRemediator {
    async fn execute(&self, action: RemediationAction) -> Result<(), RemediationError> {
        let mut command = self.command_for(action);
        command.kill_on_drop(true);

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_seconds),
            command.output(),
        )
        .await
        .map_err(|_| RemediationError::Timeout(self.timeout_seconds))?
        .map_err(|e| RemediationError::Spawn(e.to_string()))?;

        if !output.status.success() {
            return Err(RemediationError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::info!(
            target: "webhook.remediation",
            action = %action,
            output = %stdout.trim(),
            "Remediation command completed"
        );

        Ok(())
    }
}
