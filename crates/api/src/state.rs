use techstock_core::catalog::{CatalogKind, RecordService};
use techstock_db::repositories::PgCatalogStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: techstock_db::DbPool,
}

impl AppState {
    /// Record service for one catalog family, backed by the shared pool.
    pub fn catalog(&self, kind: CatalogKind) -> RecordService<PgCatalogStore> {
        RecordService::new(PgCatalogStore::new(self.pool.clone(), kind))
    }
}
