//! Append-only JSON-lines alert log.
//!
//! Every received alert becomes one JSON line in a shared log file. There is
//! no deduplication and no rotation; the file is shared with whatever tails
//! it (the demo stack mounts it into a log shipper).

use crate::errors::WebhookError;
use crate::models::AlertLogEntry;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Handle to the alert log file.
#[derive(Debug, Clone)]
pub struct AlertLog {
    path: PathBuf,
}

impl AlertLog {
    /// Create a handle for the given path. The file itself is created
    /// lazily on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AlertLog { path: path.into() }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a JSON line, creating the containing directory
    /// and the file if absent.
    pub async fn append(&self, entry: &AlertLogEntry) -> Result<(), WebhookError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| WebhookError::AlertLog(e.to_string()))?;
            }
        }

        let mut line = serde_json::to_string(entry)
            .map_err(|e| WebhookError::AlertLog(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| WebhookError::AlertLog(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| WebhookError::AlertLog(e.to_string()))?;

        Ok(())
    }
}
