use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use medically_domain::entities::User;
use medically_domain::services::RecordService;

use super::records;
use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::entities::common::DeleteResponse;

/// List every user
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users ordered by id", body = [User]),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "users"
)]
#[instrument(skip(service))]
pub async fn list_users(State(service): State<RecordService<User>>) -> Result<Json<Vec<User>>, ApiError> {
    records::list(service).await
}

/// Create a user; the id is assigned by the store
///
/// `name`, `email` and `contact` are required by the schema. A missing one
/// is reported by the store as a 500.
#[utoipa::path(
    post,
    path = "/user",
    request_body = User,
    responses(
        (status = 200, description = "The stored user", body = User),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "users"
)]
#[instrument(skip(service, record))]
pub async fn create_user(
    State(service): State<RecordService<User>>,
    JsonBody(record): JsonBody<User>,
) -> Result<Json<User>, ApiError> {
    records::create(service, record).await
}

/// Get one user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "users"
)]
#[instrument(skip(service))]
pub async fn get_user(State(service): State<RecordService<User>>, Path(id): Path<i64>) -> Result<Json<User>, ApiError> {
    records::get(service, id).await
}

/// Overwrite a user
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = User,
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 400, description = "Malformed JSON body or mismatched id", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error or missing field", body = String, content_type = "text/plain"),
    ),
    tag = "users"
)]
#[instrument(skip(service, record))]
pub async fn update_user(
    State(service): State<RecordService<User>>,
    Path(id): Path<i64>,
    JsonBody(record): JsonBody<User>,
) -> Result<Json<User>, ApiError> {
    records::update(service, id, record).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain"),
    ),
    tag = "users"
)]
#[instrument(skip(service))]
pub async fn delete_user(
    State(service): State<RecordService<User>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    records::delete(service, id).await
}
