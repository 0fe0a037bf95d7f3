//! # Error Handling Middleware
//!
//! Maps booking errors to HTTP status codes and JSON error bodies. This is the
//! only place where statuses for failures are decided; handlers just
//! propagate `BookingError` with `?`.
//!
//! Client errors are answered with 400 and their message. Anything else is
//! logged and answered with a generic 500 so storage details never reach the
//! caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use slotbook_core::errors::BookingError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::dates::parse_date;
///
/// async fn handler(date: String) -> Result<Json<String>, AppError> {
///     let date = parse_date(&date)?;
///     Ok(Json(date.to_string()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::InvalidDateFormat
            | BookingError::InvalidSlot
            | BookingError::SlotAlreadyBooked
            | BookingError::MissingField(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTemplate(_) | BookingError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            tracing::error!("Request failed: {:?}", self.0);
            INTERNAL_ERROR_MESSAGE.to_string()
        };
        let body = Json(json!({ "detail": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
