use async_trait::async_trait;

use super::{CatalogEntity, CatalogKind, CatalogRecord};
use crate::types::DbId;

/// Persistence for one catalog family.
///
/// Implementations assign identifiers on first save. Concurrent writers to
/// the same row get whatever the backing store's row semantics give them;
/// there is no version check.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The family this store persists.
    fn kind(&self) -> CatalogKind;

    /// Every record, in storage order.
    async fn find_all(&self) -> Result<Vec<CatalogRecord>, Self::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogRecord>, Self::Error>;

    /// Records whose secondary key equals `value`, ignoring case.
    async fn find_by_secondary_key(
        &self,
        value: &str,
    ) -> Result<Vec<CatalogRecord>, Self::Error>;

    /// Insert when `entity.id` is `None`, otherwise overwrite that row.
    async fn save(&self, entity: CatalogEntity) -> Result<CatalogRecord, Self::Error>;

    /// Remove the row if present. Absent ids are not an error.
    async fn delete_by_id(&self, id: DbId) -> Result<(), Self::Error>;
}
