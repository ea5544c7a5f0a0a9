use crate::models::HelloResponse;
use crate::routes;
use axum::Json;

/// GET /api/hello handler
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting message", body = HelloResponse)
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse::greeting())
}
