use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use medically_domain::entities::Clinic;
use medically_domain::services::RecordService;

use super::records;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::entities::common::DeleteResponse;

/// List every clinic
#[utoipa::path(
    get,
    path = "/clinic",
    responses(
        (status = 200, description = "All clinics ordered by id", body = [Clinic]),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "clinics"
)]
#[instrument(skip(service))]
pub async fn list_clinics(State(service): State<RecordService<Clinic>>) -> Result<Json<Vec<Clinic>>, ApiError> {
    records::list(service).await
}

/// Create a clinic; the id is assigned by the store
#[utoipa::path(
    post,
    path = "/clinic",
    request_body = Clinic,
    responses(
        (status = 200, description = "The stored clinic", body = Clinic),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "clinics"
)]
#[instrument(skip(service, record))]
pub async fn create_clinic(
    State(service): State<RecordService<Clinic>>,
    JsonBody(record): JsonBody<Clinic>,
) -> Result<Json<Clinic>, ApiError> {
    records::create(service, record).await
}

/// Get one clinic by id
#[utoipa::path(
    get,
    path = "/clinic/{id}",
    params(
        ("id" = i64, Path, description = "Clinic id")
    ),
    responses(
        (status = 200, description = "Clinic found", body = Clinic),
        (status = 404, description = "Clinic not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "clinics"
)]
#[instrument(skip(service))]
pub async fn get_clinic(State(service): State<RecordService<Clinic>>, Path(id): Path<i64>) -> Result<Json<Clinic>, ApiError> {
    records::get(service, id).await
}

/// Overwrite a clinic
#[utoipa::path(
    put,
    path = "/clinic/{id}",
    params(
        ("id" = i64, Path, description = "Clinic id")
    ),
    request_body = Clinic,
    responses(
        (status = 200, description = "The updated clinic", body = Clinic),
        (status = 400, description = "Malformed JSON body or mismatched id", body = String, content_type = "text/plain"),
        (status = 404, description = "Clinic not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "clinics"
)]
#[instrument(skip(service, record))]
pub async fn update_clinic(
    State(service): State<RecordService<Clinic>>,
    Path(id): Path<i64>,
    JsonBody(record): JsonBody<Clinic>,
) -> Result<Json<Clinic>, ApiError> {
    records::update(service, id, record).await
}

/// Delete a clinic
#[utoipa::path(
    delete,
    path = "/clinic/{id}",
    params(
        ("id" = i64, Path, description = "Clinic id")
    ),
    responses(
        (status = 200, description = "Clinic deleted", body = DeleteResponse),
        (status = 404, description = "Clinic not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "clinics"
)]
#[instrument(skip(service))]
pub async fn delete_clinic(
    State(service): State<RecordService<Clinic>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    records::delete(service, id).await
}
