//! HTTP-facing errors.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chargen_core::{AbilityError, InventoryError};
use thiserror::Error;

/// Errors returned to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be read as JSON. Keeps the status axum chose:
    /// 400 for bad syntax or shape, 413 past the body limit, 415 without a
    /// JSON content type.
    #[error("Invalid JSON: {message}")]
    InvalidJson { status: StatusCode, message: String },

    #[error("Invalid abilities: {0}")]
    InvalidAbilities(#[from] AbilityError),

    #[error("Invalid item: {0}")]
    InvalidItem(#[from] InventoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson { status, .. } => *status,
            ApiError::InvalidAbilities(_) | ApiError::InvalidItem(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
