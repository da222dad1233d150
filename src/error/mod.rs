// Error types for the shoplist service
// Author: kelexine (https://github.com/kelexine)

use crate::server::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Invalid JSON payload")]
    InvalidJson,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for the 404 every id lookup can produce
    pub fn item_not_found() -> Self {
        ApiError::NotFound("Item not found".to_string())
    }

    pub fn method_not_allowed() -> Self {
        ApiError::MethodNotAllowed("Method not allowed on /items".to_string())
    }

    /// Shorthand for an id segment that is missing or not a number
    pub fn invalid_item_id() -> Self {
        ApiError::BadRequest("Invalid item ID".to_string())
    }
}

// Render every error as a `{success: false, error}` envelope
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        ApiResponse::<()>::error(status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
