pub mod catalog_item_repo;

pub use catalog_item_repo::{CatalogItemRepo, PgCatalogStore};
