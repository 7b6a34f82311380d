//! Translation of domain errors into HTTP error responses.

use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::domain::TrackerError;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<Value>);

pub fn error_response(error: &TrackerError) -> ApiError {
    let (status, code, message) = match error {
        TrackerError::ChildNotFound(_) | TrackerError::TaskNotFound(_) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", error.to_string())
        }
        TrackerError::Persistence(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "PERSISTENCE_FAILURE",
            "Storage operation failed".to_string(),
        ),
        _ => (StatusCode::BAD_REQUEST, "INVALID_INPUT", error.to_string()),
    };

    (status, Json(json!({ "error": message, "code": code })))
}

/// 400 for input rejected before it reaches the domain
pub fn invalid_input(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message, "code": "INVALID_INPUT" })),
    )
}
