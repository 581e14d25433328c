//! HTTP error mapping for the API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::calendar::CalendarError;
use crate::utils::validation::ValidationError;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid file encoding. Please use UTF-8.")]
    InvalidEncoding,

    #[error("Error reading upload: {0}")]
    Upload(String),
}

impl ApiError {
    /// Map the error to its HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            // The calendar re-asserts ranges the HTTP layer already checks;
            // if one slips through it is still a client error.
            ApiError::Calendar(CalendarError::InvalidMonth(_) | CalendarError::InvalidDay(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Calendar(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidEncoding | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
