use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ApiResponse;
use crate::service::BookingError;

/// HTTP-layer error, rendered as the standard response envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::fail(self.message))).into_response()
    }
}

// Every validation failure surfaces as a 400 carrying the error's text;
// status codes do not differentiate error kinds.
impl From<BookingError> for ApiError {
    fn from(value: BookingError) -> Self {
        ApiError::bad_request(value.to_string())
    }
}
