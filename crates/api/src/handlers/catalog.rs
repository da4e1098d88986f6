//! Handlers for the catalog resources (`/remote-controllers`,
//! `/wall-brackets`, `/ci-modules`).
//!
//! One set of handlers serves every family; the family comes from the
//! `Extension<CatalogKind>` installed by [`crate::routes::catalog::router`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use techstock_core::catalog::{CatalogAttributes, CatalogKind, SecondaryKey};
use techstock_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::LookupParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pick the lookup value for this family, rejecting the other family's key.
fn lookup_value(kind: CatalogKind, params: LookupParams) -> AppResult<Option<String>> {
    match (kind.secondary_key(), params.brand, params.name) {
        (SecondaryKey::Brand, brand, None) => Ok(brand),
        (SecondaryKey::Name, None, name) => Ok(name),
        (key, _, _) => Err(AppError::BadRequest(format!(
            "{} items can only be filtered by '{}'",
            kind.entity_name(),
            key.column(),
        ))),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/{family}?brand= | ?name=
///
/// List every item, or only those whose brand/name matches ignoring case.
pub async fn list(
    State(state): State<AppState>,
    Extension(kind): Extension<CatalogKind>,
    Query(params): Query<LookupParams>,
) -> AppResult<impl IntoResponse> {
    let service = state.catalog(kind);
    let items = match lookup_value(kind, params)? {
        Some(value) => service.list_by_secondary_key(&value).await?,
        None => service.list_all().await?,
    };
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/{family}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(kind): Extension<CatalogKind>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog(kind).get_by_id(id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/{family}
pub async fn create(
    State(state): State<AppState>,
    Extension(kind): Extension<CatalogKind>,
    Json(input): Json<CatalogAttributes>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog(kind).create(input).await?;

    tracing::info!(
        entity = kind.entity_name(),
        id = item.id,
        "Catalog item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/{family}/{id}
///
/// Full replace: attributes missing from the body are stored as null.
pub async fn update(
    State(state): State<AppState>,
    Extension(kind): Extension<CatalogKind>,
    Path(id): Path<DbId>,
    Json(input): Json<CatalogAttributes>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog(kind).update(id, input).await?;

    tracing::info!(entity = kind.entity_name(), id, "Catalog item replaced");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/{family}/{id}
///
/// Always 204, whether or not the item existed.
pub async fn delete(
    State(state): State<AppState>,
    Extension(kind): Extension<CatalogKind>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog(kind).delete(id).await?;

    tracing::info!(entity = kind.entity_name(), id, "Catalog item deleted");

    Ok(StatusCode::NO_CONTENT)
}
