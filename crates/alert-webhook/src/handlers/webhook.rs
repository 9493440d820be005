//! Alertmanager webhook handler.
//!
//! Each alert in the batch is logged first, then dispatched to remediation
//! if it is firing and its name is in the action table. A remediation
//! failure never fails the webhook call; Alertmanager retries would only
//! re-run the same command.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::errors::WebhookError;
use crate::models::{AlertLogEntry, AlertPayload, WebhookResponse};
use crate::remediation::RemediationAction;
use crate::routes::AppState;

/// Handles `POST /webhook`.
pub async fn handle_alerts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AlertPayload>, JsonRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    let Json(payload) = payload.map_err(|e| WebhookError::InvalidPayload(e.body_text()))?;

    tracing::info!(
        target: "webhook.alerts",
        count = payload.alerts.len(),
        "Received alert batch"
    );

    for alert in &payload.alerts {
        let entry = AlertLogEntry::from_alert(alert);
        state.alert_log.append(&entry).await?;

        tracing::info!(
            target: "webhook.alerts",
            alert = %entry.alert,
            status = %entry.status,
            "Alert logged"
        );

        if !alert.is_firing() {
            continue;
        }

        let Some(action) = RemediationAction::for_alert(alert.alertname()) else {
            tracing::info!(
                target: "webhook.remediation",
                alert = %entry.alert,
                "No remediation configured"
            );
            continue;
        };

        tracing::info!(
            target: "webhook.remediation",
            alert = %entry.alert,
            action = %action,
            "Triggering remediation"
        );

        if let Err(e) = state.remediator.execute(action).await {
            tracing::error!(
                target: "webhook.remediation",
                alert = %entry.alert,
                action = %action,
                error = %e,
                "Remediation failed"
            );
        }
    }

    Ok(Json(WebhookResponse { status: "success" }))
}
