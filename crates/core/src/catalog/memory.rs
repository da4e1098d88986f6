//! In-process [`CatalogStore`] backed by an ordered map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CatalogEntity, CatalogKind, CatalogRecord, CatalogStore};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("no {entity} row with id {id} to update")]
    MissingRow { entity: &'static str, id: DbId },
}

#[derive(Debug, Default)]
struct Rows {
    last_id: DbId,
    by_id: BTreeMap<DbId, CatalogRecord>,
}

/// A catalog store that keeps rows in memory. Ids start at 1 and are never
/// reused, matching a BIGSERIAL column.
#[derive(Debug)]
pub struct InMemoryCatalogStore {
    kind: CatalogKind,
    rows: RwLock<Rows>,
}

impl InMemoryCatalogStore {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            rows: RwLock::new(Rows::default()),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    type Error = MemoryStoreError;

    fn kind(&self) -> CatalogKind {
        self.kind
    }

    async fn find_all(&self) -> Result<Vec<CatalogRecord>, Self::Error> {
        Ok(self.rows.read().await.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogRecord>, Self::Error> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_secondary_key(
        &self,
        value: &str,
    ) -> Result<Vec<CatalogRecord>, Self::Error> {
        let key = self.kind.secondary_key();
        Ok(self
            .rows
            .read()
            .await
            .by_id
            .values()
            .filter(|r| key.matches(&r.attributes, value))
            .cloned()
            .collect())
    }

    async fn save(&self, entity: CatalogEntity) -> Result<CatalogRecord, Self::Error> {
        let mut rows = self.rows.write().await;
        let id = match entity.id {
            Some(id) if rows.by_id.contains_key(&id) => id,
            Some(id) => {
                return Err(MemoryStoreError::MissingRow {
                    entity: self.kind.entity_name(),
                    id,
                })
            }
            None => {
                rows.last_id += 1;
                rows.last_id
            }
        };
        let record = CatalogRecord {
            id,
            attributes: entity.attributes,
        };
        rows.by_id.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), Self::Error> {
        self.rows.write().await.by_id.remove(&id);
        Ok(())
    }
}
