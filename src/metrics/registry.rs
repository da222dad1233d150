// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_gauge_with_registry, CounterVec, Encoder, Gauge,
    Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Responses produced by the /items routes
    pub static ref ITEM_REQUESTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("item_requests_total", "Total number of /items requests"),
        &["method", "route", "status"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // STORE METRICS
    // ============================================================================

    /// Store calls by operation
    pub static ref STORE_OPERATIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("item_store_operations_total", "Total item store operations"),
        &["operation"], // operation: list, get, create, update, delete
        REGISTRY
    ).unwrap();

    /// Items currently held
    pub static ref ITEMS_CURRENT: Gauge = register_gauge_with_registry!(
        Opts::new("items_current", "Current number of stored items"),
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}
