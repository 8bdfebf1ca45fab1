use axum::Json;
use tracing::{debug, instrument};

use crate::entities::common::MessageResponse;

/// Greeting returned by the health endpoints
pub const SERVICE_GREETING: &str = "medically-core at your service!";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn ping() -> &'static str {
    "ok"
}

/// Health check, also served at `/healthcheck`
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = MessageResponse)
    ),
    tag = "health"
)]
#[instrument]
pub async fn health_check() -> Json<MessageResponse> {
    debug!("Health check requested");
    Json(MessageResponse {
        message: SERVICE_GREETING.to_string(),
    })
}
