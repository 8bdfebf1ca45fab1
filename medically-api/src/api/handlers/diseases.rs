use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use medically_domain::entities::Disease;
use medically_domain::services::RecordService;

use super::records;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::entities::common::DeleteResponse;

/// List every disease
#[utoipa::path(
    get,
    path = "/disease",
    responses(
        (status = 200, description = "All diseases ordered by id", body = [Disease]),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "diseases"
)]
#[instrument(skip(service))]
pub async fn list_diseases(State(service): State<RecordService<Disease>>) -> Result<Json<Vec<Disease>>, ApiError> {
    records::list(service).await
}

/// Create a disease; the id is assigned by the store
#[utoipa::path(
    post,
    path = "/disease",
    request_body = Disease,
    responses(
        (status = 200, description = "The stored disease", body = Disease),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "diseases"
)]
#[instrument(skip(service, record))]
pub async fn create_disease(
    State(service): State<RecordService<Disease>>,
    JsonBody(record): JsonBody<Disease>,
) -> Result<Json<Disease>, ApiError> {
    records::create(service, record).await
}

/// Get one disease by id
#[utoipa::path(
    get,
    path = "/disease/{id}",
    params(
        ("id" = i64, Path, description = "Disease id")
    ),
    responses(
        (status = 200, description = "Disease found", body = Disease),
        (status = 404, description = "Disease not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "diseases"
)]
#[instrument(skip(service))]
pub async fn get_disease(State(service): State<RecordService<Disease>>, Path(id): Path<i64>) -> Result<Json<Disease>, ApiError> {
    records::get(service, id).await
}

/// Overwrite a disease
#[utoipa::path(
    put,
    path = "/disease/{id}",
    params(
        ("id" = i64, Path, description = "Disease id")
    ),
    request_body = Disease,
    responses(
        (status = 200, description = "The updated disease", body = Disease),
        (status = 400, description = "Malformed JSON body or mismatched id", body = String, content_type = "text/plain"),
        (status = 404, description = "Disease not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "diseases"
)]
#[instrument(skip(service, record))]
pub async fn update_disease(
    State(service): State<RecordService<Disease>>,
    Path(id): Path<i64>,
    JsonBody(record): JsonBody<Disease>,
) -> Result<Json<Disease>, ApiError> {
    records::update(service, id, record).await
}

/// Delete a disease
#[utoipa::path(
    delete,
    path = "/disease/{id}",
    params(
        ("id" = i64, Path, description = "Disease id")
    ),
    responses(
        (status = 200, description = "Disease deleted", body = DeleteResponse),
        (status = 404, description = "Disease not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "diseases"
)]
#[instrument(skip(service))]
pub async fn delete_disease(
    State(service): State<RecordService<Disease>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    records::delete(service, id).await
}
