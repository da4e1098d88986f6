//! Route definitions shared by every catalog family.

use axum::routing::get;
use axum::{Extension, Router};
use techstock_core::catalog::CatalogKind;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes for one catalog family, mounted at its prefix.
///
/// ```text
/// GET    /       -> list (optionally filtered by ?brand= or ?name=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router(kind: CatalogKind) -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list).post(catalog::create))
        .route(
            "/{id}",
            get(catalog::get_by_id)
                .put(catalog::update)
                .delete(catalog::delete),
        )
        .layer(Extension(kind))
}

/// URL prefix for a catalog family.
pub fn prefix(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::RemoteController => "/remote-controllers",
        CatalogKind::WallBracket => "/wall-brackets",
        CatalogKind::CiModule => "/ci-modules",
    }
}

/// The family whose routes serve `path`, if any.
///
/// `path` is the full request path, including [`super::API_PREFIX`].
pub fn kind_for_path(path: &str) -> Option<CatalogKind> {
    let rest = path.strip_prefix(super::API_PREFIX)?;
    CatalogKind::ALL.into_iter().find(|&kind| {
        rest.strip_prefix(prefix(kind))
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('/'))
    })
}
