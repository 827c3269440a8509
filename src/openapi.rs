use utoipa::OpenApi;

use crate::models::{ApiResponse, CreateBookingRequest, CreateClassRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::create_class,
        crate::handlers::create_booking
    ),
    components(schemas(CreateClassRequest, CreateBookingRequest, ApiResponse)),
    tags(
        (name = "booking", description = "Class and booking operations")
    ),
)]
pub struct ApiDoc;
