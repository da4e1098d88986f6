pub mod catalog;

use axum::routing::get;
use axum::Router;
use techstock_core::catalog::CatalogKind;

use crate::handlers;
use crate::state::AppState;

/// Mount point of the versioned catalog API.
pub const API_PREFIX: &str = "/api/v1";

/// Every route the server answers, before middleware.
///
/// ```text
/// /health                                catalog table status
///
/// /api/v1/remote-controllers             list (?brand=), create
/// /api/v1/remote-controllers/{id}        get, update, delete
///
/// /api/v1/wall-brackets                  list (?brand=), create
/// /api/v1/wall-brackets/{id}             get, update, delete
///
/// /api/v1/ci-modules                     list (?name=), create
/// /api/v1/ci-modules/{id}                get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest(API_PREFIX, catalog_routes())
}

/// One nested route set per catalog family.
fn catalog_routes() -> Router<AppState> {
    CatalogKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| {
            router.nest(catalog::prefix(kind), catalog::router(kind))
        })
}
