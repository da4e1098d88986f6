//! Row model shared by the `remote_controllers`, `wall_brackets` and
//! `ci_modules` tables.
//!
//! The three tables have identical columns: `id` plus the catalog field
//! table. Attribute columns are read through the field table rather than
//! listed here, so this model cannot fall out of step with the writes.

use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use techstock_core::catalog::{AttributeSource, CatalogAttributes, CatalogRecord};
use techstock_core::types::DbId;

/// A row from any catalog table.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub id: DbId,
    pub attributes: CatalogAttributes,
}

impl<'r> FromRow<'r, PgRow> for CatalogRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            attributes: CatalogAttributes::read_from(&PgRowSource(row))?,
        })
    }
}

impl From<CatalogRow> for CatalogRecord {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            attributes: row.attributes,
        }
    }
}

struct PgRowSource<'r>(&'r PgRow);

impl AttributeSource for PgRowSource<'_> {
    type Error = sqlx::Error;

    fn text(&self, column: &'static str) -> Result<Option<String>, sqlx::Error> {
        self.0.try_get(column)
    }

    fn decimal(&self, column: &'static str) -> Result<Option<Decimal>, sqlx::Error> {
        self.0.try_get(column)
    }

    fn flag(&self, column: &'static str) -> Result<Option<bool>, sqlx::Error> {
        self.0.try_get(column)
    }

    fn count(&self, column: &'static str) -> Result<Option<i32>, sqlx::Error> {
        self.0.try_get(column)
    }
}
