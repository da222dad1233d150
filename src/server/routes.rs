// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    create_item, delete_item, get_item, health_handler, list_items, method_not_allowed,
    metrics_handler, missing_item_id, route_not_found, update_item,
};
use super::middleware::{envelope_errors, record_metrics, request_id_layers};
use crate::config::AppConfig;
use crate::store::SharedStore;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, MethodRouter};
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

pub fn create_router(config: &AppConfig, store: SharedStore) -> Router {
    let state = AppState { store };

    let collection: MethodRouter<AppState> = get(list_items)
        .post(create_item)
        .put(missing_item_id)
        .delete(missing_item_id)
        .fallback(method_not_allowed);

    let member: MethodRouter<AppState> = get(get_item)
        .put(update_item)
        .delete(delete_item)
        .fallback(method_not_allowed);

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app = Router::new()
        .route("/items", collection.clone())
        .route("/items/", collection)
        .route("/items/:id", member.clone())
        .route("/items/:id/*rest", member)
        .route_layer(middleware::from_fn(record_metrics))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(route_not_found);

    // Bounds how long a client may take to deliver its body
    if let Some(timeout) = config.limits.request_timeout() {
        app = app.layer(TimeoutLayer::new(timeout));
    }

    app.layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(middleware::map_response(envelope_errors))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
