//! Record service: the six catalog operations over a [`CatalogStore`].
//!
//! Each operation is a straight line through store and translator with at
//! most one existence check. The only failure originated here is
//! [`CoreError::NotFound`]; store failures pass through untouched as
//! [`ServiceError::Store`].
//!
//! `update` reads and then writes in two separate store calls. Two callers
//! updating the same id concurrently can lose one of the updates.

use super::translate::{merge, to_entity, to_output};
use super::{CatalogAttributes, CatalogItem, CatalogStore};
use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError<E> {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(E),
}

pub type ServiceResult<T, E> = Result<T, ServiceError<E>>;

pub struct RecordService<S> {
    store: S,
}

impl<S: CatalogStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<CatalogItem>, S::Error> {
        let records = self.store.find_all().await.map_err(ServiceError::Store)?;
        Ok(records.iter().map(to_output).collect())
    }

    pub async fn list_by_secondary_key(
        &self,
        value: &str,
    ) -> ServiceResult<Vec<CatalogItem>, S::Error> {
        let records = self
            .store
            .find_by_secondary_key(value)
            .await
            .map_err(ServiceError::Store)?;
        Ok(records.iter().map(to_output).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> ServiceResult<CatalogItem, S::Error> {
        let record = self
            .store
            .find_by_id(id)
            .await
            .map_err(ServiceError::Store)?
            .ok_or_else(|| self.not_found(id))?;
        Ok(to_output(&record))
    }

    /// No duplicate detection: identical payloads create distinct rows.
    pub async fn create(&self, input: CatalogAttributes) -> ServiceResult<CatalogItem, S::Error> {
        let saved = self
            .store
            .save(to_entity(input))
            .await
            .map_err(ServiceError::Store)?;
        Ok(to_output(&saved))
    }

    /// Replace every attribute of record `id` with `input`.
    pub async fn update(
        &self,
        id: DbId,
        input: CatalogAttributes,
    ) -> ServiceResult<CatalogItem, S::Error> {
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(ServiceError::Store)?
            .ok_or_else(|| self.not_found(id))?;
        let saved = self
            .store
            .save(merge(existing, input))
            .await
            .map_err(ServiceError::Store)?;
        Ok(to_output(&saved))
    }

    /// Delete record `id`. Succeeds whether or not it existed.
    pub async fn delete(&self, id: DbId) -> ServiceResult<(), S::Error> {
        self.store
            .delete_by_id(id)
            .await
            .map_err(ServiceError::Store)
    }

    fn not_found(&self, id: DbId) -> CoreError {
        CoreError::NotFound {
            entity: self.store.kind().entity_name(),
            id,
        }
    }
}
