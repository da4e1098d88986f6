//! Repository for the catalog tables (`remote_controllers`, `wall_brackets`,
//! `ci_modules`).
//!
//! Table and column names come from [`CatalogKind`] and the catalog field
//! table, never from request input; every value is a bound parameter.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use techstock_core::catalog::{
    AttributeValue, CatalogAttributes, CatalogEntity, CatalogKind, CatalogRecord, CatalogStore,
};
use techstock_core::types::DbId;

use crate::models::catalog_item::CatalogRow;

type CatalogQuery<'q> = QueryAs<'q, Postgres, CatalogRow, PgArguments>;

/// Column list for `SELECT` and `RETURNING` clauses.
fn columns() -> String {
    format!("id, {}", CatalogAttributes::COLUMNS.join(", "))
}

/// Bind every attribute in field-table order.
fn bind_attributes<'q>(
    mut query: CatalogQuery<'q>,
    attributes: &'q CatalogAttributes,
) -> CatalogQuery<'q> {
    for value in attributes.values() {
        query = match value {
            AttributeValue::Text(v) => query.bind(v),
            AttributeValue::Decimal(v) => query.bind(v),
            AttributeValue::Flag(v) => query.bind(v),
            AttributeValue::Count(v) => query.bind(v),
        };
    }
    query
}

/// Provides CRUD operations for catalog items of any kind.
pub struct CatalogItemRepo;

impl CatalogItemRepo {
    /// Insert a new row, returning it with its assigned id.
    pub async fn create(
        pool: &PgPool,
        kind: CatalogKind,
        input: &CatalogAttributes,
    ) -> Result<CatalogRow, sqlx::Error> {
        let placeholders: Vec<String> = (1..=CatalogAttributes::COLUMNS.len())
            .map(|n| format!("${n}"))
            .collect();
        let query = format!(
            "INSERT INTO {table} ({attrs}) VALUES ({placeholders}) RETURNING {columns}",
            table = kind.table(),
            attrs = CatalogAttributes::COLUMNS.join(", "),
            placeholders = placeholders.join(", "),
            columns = columns(),
        );
        bind_attributes(sqlx::query_as::<_, CatalogRow>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Find a row by its id.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: CatalogKind,
        id: DbId,
    ) -> Result<Option<CatalogRow>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", columns(), kind.table());
        sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every row, ordered by id.
    pub async fn list(pool: &PgPool, kind: CatalogKind) -> Result<Vec<CatalogRow>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} ORDER BY id", columns(), kind.table());
        sqlx::query_as::<_, CatalogRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List rows whose secondary key (brand or name) equals `value`,
    /// ignoring case. Ordered by id.
    pub async fn list_by_secondary_key(
        pool: &PgPool,
        kind: CatalogKind,
        value: &str,
    ) -> Result<Vec<CatalogRow>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE LOWER({}) = LOWER($1) ORDER BY id",
            columns(),
            kind.table(),
            kind.secondary_key().column(),
        );
        sqlx::query_as::<_, CatalogRow>(&query)
            .bind(value)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every attribute of row `id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        kind: CatalogKind,
        id: DbId,
        input: &CatalogAttributes,
    ) -> Result<Option<CatalogRow>, sqlx::Error> {
        let assignments: Vec<String> = CatalogAttributes::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 2))
            .collect();
        let query = format!(
            "UPDATE {} SET {} WHERE id = $1 RETURNING {}",
            kind.table(),
            assignments.join(", "),
            columns(),
        );
        bind_attributes(sqlx::query_as::<_, CatalogRow>(&query).bind(id), input)
            .fetch_optional(pool)
            .await
    }

    /// Number of rows in the family's table.
    pub async fn count(pool: &PgPool, kind: CatalogKind) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", kind.table());
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Delete row `id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, kind: CatalogKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

/// [`CatalogStore`] over one catalog table.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
    kind: CatalogKind,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool, kind: CatalogKind) -> Self {
        Self { pool, kind }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    type Error = sqlx::Error;

    fn kind(&self) -> CatalogKind {
        self.kind
    }

    async fn find_all(&self) -> Result<Vec<CatalogRecord>, sqlx::Error> {
        let rows = CatalogItemRepo::list(&self.pool, self.kind).await?;
        Ok(rows.into_iter().map(CatalogRecord::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<CatalogRecord>, sqlx::Error> {
        let row = CatalogItemRepo::find_by_id(&self.pool, self.kind, id).await?;
        Ok(row.map(CatalogRecord::from))
    }

    async fn find_by_secondary_key(
        &self,
        value: &str,
    ) -> Result<Vec<CatalogRecord>, sqlx::Error> {
        let rows = CatalogItemRepo::list_by_secondary_key(&self.pool, self.kind, value).await?;
        Ok(rows.into_iter().map(CatalogRecord::from).collect())
    }

    /// A `Some` id with no matching row yields `sqlx::Error::RowNotFound`.
    async fn save(&self, entity: CatalogEntity) -> Result<CatalogRecord, sqlx::Error> {
        let row = match entity.id {
            None => {
                let row =
                    CatalogItemRepo::create(&self.pool, self.kind, &entity.attributes).await?;
                tracing::debug!(table = self.kind.table(), id = row.id, "Catalog row inserted");
                row
            }
            Some(id) => {
                let row =
                    CatalogItemRepo::replace(&self.pool, self.kind, id, &entity.attributes)
                        .await?
                        .ok_or(sqlx::Error::RowNotFound)?;
                tracing::debug!(table = self.kind.table(), id, "Catalog row replaced");
                row
            }
        };
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let deleted = CatalogItemRepo::delete(&self.pool, self.kind, id).await?;
        tracing::debug!(table = self.kind.table(), id, deleted, "Catalog row delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_list_starts_with_id() {
        let cols = columns();
        assert!(cols.starts_with("id, item_type, brand, name"));
        assert!(cols.ends_with("original_stock, sold"));
    }
}
