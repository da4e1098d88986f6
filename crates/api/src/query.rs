//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Secondary-key filter for catalog list endpoints (`?brand=` or `?name=`).
///
/// Which parameter applies depends on the catalog family; the handler
/// rejects the other one.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub brand: Option<String>,
    pub name: Option<String>,
}
