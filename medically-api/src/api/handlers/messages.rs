use axum::extract::State;
use axum::Json;
use tracing::instrument;

use medically_domain::entities::Message;
use medically_domain::services::MessageService;

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::entities::common::{CountResponse, MessageResponse};

/// Store a message, overwriting an identical one
#[utoipa::path(
    post,
    path = "/add-message",
    request_body = Message,
    responses(
        (status = 200, description = "Message stored", body = MessageResponse),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing value", body = String, content_type = "text/plain"),
    ),
    tag = "messages"
)]
#[instrument(skip(service))]
pub async fn add_message(
    State(service): State<MessageService>,
    JsonBody(message): JsonBody<Message>,
) -> Result<Json<MessageResponse>, ApiError> {
    let stored = service.upsert(message).await?;
    Ok(Json(MessageResponse {
        message: stored.value.unwrap_or_default(),
    }))
}

/// Number of stored messages
#[utoipa::path(
    get,
    path = "/count",
    responses(
        (status = 200, description = "Row count of the message table", body = CountResponse),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "messages"
)]
#[instrument(skip(service))]
pub async fn count_messages(State(service): State<MessageService>) -> Result<Json<CountResponse>, ApiError> {
    let count = service.count().await?;
    Ok(Json(CountResponse { count }))
}
