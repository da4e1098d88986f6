//! Domain layer for the techstock catalog backend.
//!
//! Pure types and orchestration with no database or HTTP dependencies: the
//! catalog field table, the store abstraction, the translator between
//! persisted records and their external shapes, and the record service that
//! ties them together.

pub mod catalog;
pub mod error;
pub mod types;
