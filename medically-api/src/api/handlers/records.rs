//! Handler bodies shared by every entity route.
//!
//! The per-entity modules wrap these with their own path documentation.

use axum::Json;
use serde::Serialize;
use tracing::info;

use medically_domain::entities::Entity;
use medically_domain::services::RecordService;

use crate::api::errors::ApiError;
use crate::entities::common::DeleteResponse;

pub async fn list<E>(service: RecordService<E>) -> Result<Json<Vec<E>>, ApiError>
where
    E: Entity + Serialize,
{
    let records = service.list().await?;
    Ok(Json(records))
}

pub async fn create<E>(service: RecordService<E>, record: E) -> Result<Json<E>, ApiError>
where
    E: Entity + Serialize,
{
    let created = service.create(record).await?;
    info!("Created {} {}", E::NAME, created.id().unwrap_or_default());
    Ok(Json(created))
}

pub async fn get<E>(service: RecordService<E>, id: i64) -> Result<Json<E>, ApiError>
where
    E: Entity + Serialize,
{
    let record = service.get(id).await?;
    Ok(Json(record))
}

pub async fn update<E>(service: RecordService<E>, id: i64, record: E) -> Result<Json<E>, ApiError>
where
    E: Entity + Serialize,
{
    let updated = service.update(id, record).await?;
    info!("Updated {} {}", E::NAME, id);
    Ok(Json(updated))
}

pub async fn delete<E>(service: RecordService<E>, id: i64) -> Result<Json<DeleteResponse>, ApiError>
where
    E: Entity,
{
    let id = service.delete(id).await?;
    info!("Deleted {} {}", E::NAME, id);
    Ok(Json(DeleteResponse { id }))
}
