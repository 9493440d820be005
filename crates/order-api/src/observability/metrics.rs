//! Metrics definitions for the Order API.
//!
//! All metrics follow Prometheus naming conventions:
//! - `orderapi_` prefix for service metrics
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! Host gauges keep the conventional `system_` prefix so standard
//! CPU/memory/disk alerting rules apply unchanged.
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `method`: HTTP methods actually routed (GET, POST)
//! - `endpoint`: matched route templates plus the "unknown" sentinel
//! - `status`: numeric HTTP status codes

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;
use sysinfo::{Disks, System};

/// Endpoint label used when no route matched the request.
pub const UNKNOWN_ENDPOINT: &str = "unknown";

/// In-flight request count backing the active-connections gauge.
///
/// Process-scoped by design: the gauge mirrors this atomic so concurrent
/// increments and decrements can never leave the reported value torn.
static ACTIVE_CONNECTIONS: AtomicI64 = AtomicI64::new(0);

/// Shared sysinfo handle for host gauge sampling.
///
/// Reused across calls so CPU usage deltas accumulate between refreshes;
/// a freshly created `System` reports 0% CPU on its first read.
static SYSTEM: OnceLock<Mutex<System>> = OnceLock::new();

/// Held by tests that assert before/after values of the process-global
/// in-flight count, so parallel test threads cannot interleave.
#[cfg(test)]
pub(crate) static ACTIVE_CONNECTIONS_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Initialize Prometheus metrics recorder and return the handle
/// for serving metrics via HTTP.
///
/// Must be called before any metrics are recorded. Histogram buckets span
/// the injected delays (5ms up to the slow simulator's multi-second range).
///
/// # Errors
///
/// Returns error if the Prometheus recorder fails to install (e.g., already
/// installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("orderapi_http_request".to_string()),
            &[
                0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000, 2.500, 5.000, 10.000,
            ],
        )
        .map_err(|e| format!("Failed to set HTTP request buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

// ============================================================================
// HTTP Request Metrics
// ============================================================================

/// Record HTTP request completion.
///
/// Metric: `orderapi_http_requests_total`, `orderapi_http_request_duration_seconds`
/// Labels: `method`, `endpoint`, `status` (duration is labeled by method and
/// endpoint only).
///
/// If the status is an error (>= 400), `orderapi_http_errors_total` is also
/// incremented with the same labels. This captures ALL responses, including
/// framework-level errors like 404 Not Found and 405 Method Not Allowed.
pub fn record_http_request(method: &str, endpoint: &str, status_code: u16, duration: Duration) {
    counter!("orderapi_http_requests_total",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status_code.to_string()
    )
    .increment(1);

    histogram!("orderapi_http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .record(duration.as_secs_f64());

    if status_code >= 400 {
        counter!("orderapi_http_errors_total",
            "method" => method.to_string(),
            "endpoint" => endpoint.to_string(),
            "status" => status_code.to_string()
        )
        .increment(1);
    }
}

// ============================================================================
// Order Metrics
// ============================================================================

/// Record a successfully created order.
///
/// Metric: `orderapi_orders_total`
pub fn record_order_created() {
    counter!("orderapi_orders_total").increment(1);
}

// ============================================================================
// Active Connection Gauge
// ============================================================================

/// Record the start of an in-flight request.
///
/// Metric: `orderapi_active_connections`
pub fn connection_opened() {
    let current = ACTIVE_CONNECTIONS.fetch_add(1, Ordering::SeqCst) + 1;
    gauge!("orderapi_active_connections").set(current as f64);
}

/// Record the end of an in-flight request.
pub fn connection_closed() {
    let current = ACTIVE_CONNECTIONS.fetch_sub(1, Ordering::SeqCst) - 1;
    gauge!("orderapi_active_connections").set(current as f64);
}

/// Current in-flight request count (for tests).
pub fn active_connections() -> i64 {
    ACTIVE_CONNECTIONS.load(Ordering::SeqCst)
}

// ============================================================================
// Host Gauges
// ============================================================================

/// Sample host CPU, memory, and disk usage into the system gauges.
///
/// Metrics: `system_cpu_usage_percent`, `system_memory_usage_percent`,
/// `system_disk_usage_percent`
///
/// Called after every instrumented request so latency- and pressure-based
/// alerting rules always see fresh values.
pub fn update_system_gauges() {
    let system = SYSTEM.get_or_init(|| Mutex::new(System::new()));
    let mut sys = system.lock().unwrap_or_else(PoisonError::into_inner);

    sys.refresh_cpu();
    sys.refresh_memory();

    let cpu_percent = f64::from(sys.global_cpu_info().cpu_usage()).clamp(0.0, 100.0);
    gauge!("system_cpu_usage_percent").set(cpu_percent);

    let total_memory = sys.total_memory();
    if total_memory > 0 {
        let memory_percent = (sys.used_memory() as f64 / total_memory as f64) * 100.0;
        gauge!("system_memory_usage_percent").set(memory_percent.clamp(0.0, 100.0));
    }

    if let Some(disk_percent) = root_disk_usage_percent() {
        gauge!("system_disk_usage_percent").set(disk_percent);
    }
}

/// Usage percentage of the disk backing `/`, falling back to the first
/// listed disk when no root mount is present (e.g., some containers).
fn root_disk_usage_percent() -> Option<f64> {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .iter()
        .find(|d| d.mount_point() == std::path::Path::new("/"))
        .or_else(|| disks.iter().next())?;

    let total = disk.total_space();
    if total == 0 {
        return None;
    }

    let used = total.saturating_sub(disk.available_space());
    Some(((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0))
}
