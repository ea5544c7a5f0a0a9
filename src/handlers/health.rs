use crate::models::HealthResponse;
use crate::routes;
use axum::Json;

/// GET /api/health handler - Health check endpoint
///
/// The backend has no dependencies to probe, so a response at all means it
/// is healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check passed");
    Json(HealthResponse::healthy())
}
