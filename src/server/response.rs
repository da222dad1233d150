//! JSON response envelope shared by every endpoint.
//!
//! Success and failure both render as
//! `{"success": bool, "data"?: T, "error"?: string, "message"?: string}`
//! with `content-type: application/json`. Absent fields are omitted.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    #[serde(skip, default = "default_status")]
    status: StatusCode,

    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_status() -> StatusCode {
    StatusCode::OK
}

impl<T> ApiResponse<T> {
    /// 200 with a data payload
    pub fn success(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    /// 201 with the newly created resource
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, data)
    }

    pub fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            status,
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// 200 carrying only a human-readable message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
