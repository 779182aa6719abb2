//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP status codes and JSON error responses so the
//! whole API fails uniformly. Rejection decisions are not errors and never
//! pass through here; only `BookingError` values do.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventbook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::InvalidReference(_) => StatusCode::NOT_FOUND,
            BookingError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::CapacityExceeded(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using `?` on functions returning `Result<T, BookingError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Wraps raw repository errors as storage failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Storage(err))
    }
}
