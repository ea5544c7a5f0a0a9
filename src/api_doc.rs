use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, HelloResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pockett Docs API",
        version = "0.1.0",
        description = "Backend for the Pockett Docs web application"
    ),
    paths(
        handlers::health::health_handler,
        handlers::hello::hello_handler
    ),
    components(
        schemas(
            HealthResponse,
            HelloResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "hello", description = "Greeting endpoint")
    )
)]
pub struct ApiDoc;
