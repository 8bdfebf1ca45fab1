use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, info, instrument, warn};

use medically_data::repository::SharedStore;

use crate::entities::Entity;
use crate::errors::ServiceError;

/// CRUD operations for one entity type over a shared store
pub struct RecordService<E> {
    store: SharedStore,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for RecordService<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> fmt::Debug for RecordService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordService")
            .field("entity", &E::NAME)
            .field("store", &self.store)
            .finish()
    }
}

impl<E: Entity> RecordService<E> {
    /// Create a new record service
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Every record, ordered by id
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn list(&self) -> Result<Vec<E>, ServiceError> {
        let rows = self.store.find_all(E::table()).await?;
        debug!("Listed {} records", rows.len());
        Ok(rows.into_iter().map(E::from_row).collect())
    }

    /// Insert `entity`; any id it carries is replaced by the store's
    #[instrument(skip(self, entity), fields(entity = E::NAME))]
    pub async fn create(&self, entity: E) -> Result<E, ServiceError> {
        if let Some(id) = entity.id() {
            debug!("Ignoring client-supplied id {}", id);
        }

        let row = self.store.create(E::table(), entity.into_values()).await?;
        info!("Created record with id {}", row.id);
        Ok(E::from_row(row))
    }

    /// The record with `id`
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get(&self, id: i64) -> Result<E, ServiceError> {
        let row = self.store.find(E::table(), id).await?;
        Ok(E::from_row(row))
    }

    /// Overwrite the record with `id`.
    ///
    /// Fails with [`ServiceError::NotFound`] if there is no such record and
    /// with [`ServiceError::InvalidInput`] if `entity` carries a different id.
    #[instrument(skip(self, entity), fields(entity = E::NAME))]
    pub async fn update(&self, id: i64, entity: E) -> Result<E, ServiceError> {
        if let Some(body_id) = entity.id() {
            if body_id != id {
                warn!("Body id {} does not match path id {}", body_id, id);
                return Err(ServiceError::InvalidInput(format!(
                    "id in body ({}) does not match id in path ({})",
                    body_id, id
                )));
            }
        }

        let row = medically_data::models::Row::new(id, entity.into_values());
        let saved = self.store.save(E::table(), row).await?;
        info!("Updated record with id {}", id);
        Ok(E::from_row(saved))
    }

    /// Delete the record with `id`, returning the deleted id
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        let affected = self.store.delete(E::table(), id).await?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "record not found: {} id={}",
                E::table().name,
                id
            )));
        }

        info!("Deleted record with id {}", id);
        Ok(id)
    }
}
