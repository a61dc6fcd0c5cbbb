//! API error types with IntoResponse
//!
//! Client errors carry `{ "error": message }`. Storage failures are logged
//! and answered with a bare 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::registrar::StorageError;

/// Message returned for a duplicate email
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A visitor with this email already exists.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Email already registered (409)
    DuplicateEmail,

    /// Store failure (500, logged)
    Storage(StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            Self::DuplicateEmail => (
                StatusCode::CONFLICT,
                Json(json!({ "error": DUPLICATE_EMAIL_MESSAGE })),
            )
                .into_response(),
            Self::Storage(e) => {
                // Log the actual error, return nothing
                tracing::error!(error = %e, "failed to save visitor to database");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}
