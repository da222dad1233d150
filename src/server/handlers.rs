// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::response::ApiResponse;
use super::routes::AppState;
use super::validation::{parse_item_id, validate_item_update, validate_new_item};
use crate::error::{ApiError, Result};
use crate::store::Item;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, Uri};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
    pub timestamp: String,
}

/// Path parameters of `/items/:id` and `/items/:id/*rest`; anything after the id is ignored
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    id: String,
}

type ItemPathParam = std::result::Result<Path<ItemPath>, PathRejection>;

fn item_id(path: ItemPathParam) -> Result<u64> {
    let Path(path) = path.map_err(|e| {
        debug!("Rejected item path: {}", e);
        ApiError::invalid_item_id()
    })?;
    parse_item_id(&path.id)
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let items = state.store.read().len();

    Json(HealthResponse {
        status: "ok".to_string(),
        items,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> ApiResponse<Vec<Item>> {
    let items = state.store.read().list_items().to_vec();
    ApiResponse::success(items)
}

/// GET /items/:id
pub async fn get_item(
    State(state): State<AppState>,
    path: ItemPathParam,
) -> Result<ApiResponse<Item>> {
    let id = item_id(path)?;
    let item = state.store.read().get_item(id).cloned();

    item.map(ApiResponse::success)
        .ok_or_else(ApiError::item_not_found)
}

/// POST /items
///
/// The `Bytes` extractor resolves only once the whole body has arrived, so
/// validation never sees a partial payload.
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<Item>> {
    let new_item = validate_new_item(&body)?;

    let item = state.store.write().create_item(
        new_item.name,
        new_item.quantity,
        new_item.purchased_status,
    );

    info!("Created item id={} name={:?}", item.id, item.name);
    Ok(ApiResponse::created(item))
}

/// PUT /items/:id
pub async fn update_item(
    State(state): State<AppState>,
    path: ItemPathParam,
    body: Bytes,
) -> Result<ApiResponse<Item>> {
    let id = item_id(path)?;
    let update = validate_item_update(&body)?;

    let item = state
        .store
        .write()
        .update_item(id, update)
        .ok_or_else(ApiError::item_not_found)?;

    info!("Updated item id={}", item.id);
    Ok(ApiResponse::success(item))
}

/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    path: ItemPathParam,
) -> Result<ApiResponse> {
    let id = item_id(path)?;

    if !state.store.write().delete_item(id) {
        return Err(ApiError::item_not_found());
    }

    info!("Deleted item id={}", id);
    Ok(ApiResponse::message("Item deleted successfully"))
}

/// PUT or DELETE on the collection path, where an id is required
pub async fn missing_item_id() -> ApiError {
    ApiError::invalid_item_id()
}

/// Any verb the /items routes do not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Paths outside the routes above. Anything under the `/items` prefix is
/// still owned by the item routes, so it is answered as an unsupported verb.
pub async fn route_not_found(uri: Uri) -> ApiError {
    if uri.path().starts_with("/items") {
        return ApiError::method_not_allowed();
    }
    ApiError::NotFound("Route not found".to_string())
}
