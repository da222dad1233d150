//! Axum-based HTTP server for the shopping-list service.
//!
//! This module maps HTTP verbs and paths under `/items` onto the item store,
//! validates request bodies, and shapes every reply as a JSON envelope.
//!
//! # Components
//!
//! - `handlers`: One handler per endpoint, plus health and metrics.
//! - `listener`: Binding the configured TCP address.
//! - `middleware`: Request ID tracking, per-request metrics and error envelopes.
//! - `response`: The `{success, data|error|message}` envelope.
//! - `routes`: The router configuration that ties everything together.
//! - `validation`: Path id parsing and field-by-field body checks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod listener;
mod middleware;
mod response;
mod routes;
pub mod validation;

pub use handlers::HealthResponse;
pub use listener::bind_listener;
pub use response::ApiResponse;
pub use routes::{create_router, AppState};
