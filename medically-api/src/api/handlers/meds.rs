use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use medically_domain::entities::Med;
use medically_domain::services::RecordService;

use super::records;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::entities::common::DeleteResponse;

/// List every medication
#[utoipa::path(
    get,
    path = "/med",
    responses(
        (status = 200, description = "All medications ordered by id", body = [Med]),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "meds"
)]
#[instrument(skip(service))]
pub async fn list_meds(State(service): State<RecordService<Med>>) -> Result<Json<Vec<Med>>, ApiError> {
    records::list(service).await
}

/// Create a medication; the id is assigned by the store
#[utoipa::path(
    post,
    path = "/med",
    request_body = Med,
    responses(
        (status = 200, description = "The stored medication", body = Med),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "meds"
)]
#[instrument(skip(service, record))]
pub async fn create_med(
    State(service): State<RecordService<Med>>,
    JsonBody(record): JsonBody<Med>,
) -> Result<Json<Med>, ApiError> {
    records::create(service, record).await
}

/// Get one medication by id
#[utoipa::path(
    get,
    path = "/med/{id}",
    params(
        ("id" = i64, Path, description = "Med id")
    ),
    responses(
        (status = 200, description = "Med found", body = Med),
        (status = 404, description = "Med not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "meds"
)]
#[instrument(skip(service))]
pub async fn get_med(State(service): State<RecordService<Med>>, Path(id): Path<i64>) -> Result<Json<Med>, ApiError> {
    records::get(service, id).await
}

/// Overwrite a medication
#[utoipa::path(
    put,
    path = "/med/{id}",
    params(
        ("id" = i64, Path, description = "Med id")
    ),
    request_body = Med,
    responses(
        (status = 200, description = "The updated medication", body = Med),
        (status = 400, description = "Malformed JSON body or mismatched id", body = String, content_type = "text/plain"),
        (status = 404, description = "Med not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "meds"
)]
#[instrument(skip(service, record))]
pub async fn update_med(
    State(service): State<RecordService<Med>>,
    Path(id): Path<i64>,
    JsonBody(record): JsonBody<Med>,
) -> Result<Json<Med>, ApiError> {
    records::update(service, id, record).await
}

/// Delete a medication
#[utoipa::path(
    delete,
    path = "/med/{id}",
    params(
        ("id" = i64, Path, description = "Med id")
    ),
    responses(
        (status = 200, description = "Med deleted", body = DeleteResponse),
        (status = 404, description = "Med not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "meds"
)]
#[instrument(skip(service))]
pub async fn delete_med(
    State(service): State<RecordService<Med>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    records::delete(service, id).await
}
