use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use tracing::{error, info, warn};

use crate::{
    AppState,
    error::ApiError,
    models::{ApiResponse, CreateBookingRequest, CreateClassRequest},
    validation::validate_capacity,
};

pub const CLASS_CREATED: &str = "class created successfully";
pub const BOOKING_CREATED: &str = "booking created successfully";

#[utoipa::path(get, path = "/", tag = "booking")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Studio Booking API",
        "endpoints": {
            "/class": "Create a class with a capacity and booking window",
            "/booking": "Book a user into a class on a date"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "booking")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "booking")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/class",
    request_body = CreateClassRequest,
    responses(
        (status = 200, description = "Class created", body = ApiResponse),
        (status = 400, description = "Malformed payload or invalid class data", body = ApiResponse)
    ),
    tag = "booking"
)]
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|err| {
        error!(error = %err, "failed to bind class payload");
        ApiError::bad_request("invalid request payload")
    })?;

    validate_capacity(request.class_capacity)?;

    state.service.create_class(&request).map_err(|err| {
        warn!(class = %request.class_name, error = %err, "class creation rejected");
        ApiError::from(err)
    })?;

    info!(class = %request.class_name, capacity = request.class_capacity, "class created");
    Ok(Json(ApiResponse::ok(CLASS_CREATED)))
}

#[utoipa::path(
    post,
    path = "/booking",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse),
        (status = 400, description = "Malformed payload or rejected booking", body = ApiResponse)
    ),
    tag = "booking"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|err| {
        error!(error = %err, "failed to bind booking payload");
        ApiError::bad_request("invalid request payload")
    })?;

    state.service.create_booking(&request).map_err(|err| {
        warn!(
            class = %request.class_name,
            user = %request.user_name,
            error = %err,
            "booking rejected"
        );
        ApiError::from(err)
    })?;

    info!(class = %request.class_name, user = %request.user_name, "booking created");
    Ok(Json(ApiResponse::ok(BOOKING_CREATED)))
}
