// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, ITEMS_CURRENT, ITEM_REQUESTS, STORE_OPERATIONS};

/// Helper to record one answered request
pub fn record_request(method: &str, route: &str, status_code: u16) {
    ITEM_REQUESTS
        .with_label_values(&[method, route, &status_code.to_string()])
        .inc();
}

/// Helper to record a store call
pub fn record_store_operation(operation: &str) {
    STORE_OPERATIONS.with_label_values(&[operation]).inc();
}

pub fn update_item_count(count: usize) {
    ITEMS_CURRENT.set(count as f64);
}
