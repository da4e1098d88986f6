//! Catalog items: remote controllers, wall brackets and CI modules.
//!
//! All three families share one attribute set ([`CatalogAttributes`]) and
//! differ only in their table and in which attribute serves as the
//! case-insensitive lookup key.

pub mod attributes;
pub mod memory;
pub mod service;
pub mod store;
pub mod translate;

use serde::Serialize;

use crate::types::DbId;

pub use attributes::{AttributeSource, AttributeValue, CatalogAttributes};
pub use memory::InMemoryCatalogStore;
pub use service::{RecordService, ServiceError, ServiceResult};
pub use store::CatalogStore;

/// The catalog families served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    RemoteController,
    WallBracket,
    CiModule,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::RemoteController,
        CatalogKind::WallBracket,
        CatalogKind::CiModule,
    ];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            CatalogKind::RemoteController => "remote_controllers",
            CatalogKind::WallBracket => "wall_brackets",
            CatalogKind::CiModule => "ci_modules",
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            CatalogKind::RemoteController => "RemoteController",
            CatalogKind::WallBracket => "WallBracket",
            CatalogKind::CiModule => "CIModule",
        }
    }

    pub fn secondary_key(self) -> SecondaryKey {
        match self {
            CatalogKind::RemoteController | CatalogKind::WallBracket => SecondaryKey::Brand,
            CatalogKind::CiModule => SecondaryKey::Name,
        }
    }
}

/// The string attribute a family is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryKey {
    Brand,
    Name,
}

impl SecondaryKey {
    /// Column (and query parameter) name.
    pub fn column(self) -> &'static str {
        match self {
            SecondaryKey::Brand => "brand",
            SecondaryKey::Name => "name",
        }
    }

    pub fn value_of(self, attributes: &CatalogAttributes) -> Option<&str> {
        match self {
            SecondaryKey::Brand => attributes.brand.as_deref(),
            SecondaryKey::Name => attributes.name.as_deref(),
        }
    }

    /// Case-insensitive exact match of `attributes` against `value`.
    pub fn matches(self, attributes: &CatalogAttributes, value: &str) -> bool {
        self.value_of(attributes)
            .is_some_and(|v| v.to_lowercase() == value.to_lowercase())
    }
}

/// An entity as handed to [`CatalogStore::save`]. `id` is `None` until the
/// store has assigned one.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntity {
    pub id: Option<DbId>,
    pub attributes: CatalogAttributes,
}

/// A persisted entity. The identifier is store-assigned and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub id: DbId,
    pub attributes: CatalogAttributes,
}

/// The outward-facing shape of a record: identifier plus every attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: DbId,
    #[serde(flatten)]
    pub attributes: CatalogAttributes,
}
