//! Handler for `GET /health`.
//!
//! Reports whether each catalog table can be queried, along with its row
//! count. Any unreachable table marks the service `degraded`; the endpoint
//! itself always answers 200 so load balancers can read the body.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use techstock_core::catalog::CatalogKind;
use techstock_db::repositories::CatalogItemRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every catalog table answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub catalogs: Vec<CatalogHealth>,
}

#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    pub catalog: &'static str,
    pub table: &'static str,
    /// Row count, or `null` if the table could not be queried.
    pub items: Option<i64>,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut catalogs = Vec::with_capacity(CatalogKind::ALL.len());
    for kind in CatalogKind::ALL {
        let items = match CatalogItemRepo::count(&state.pool, kind).await {
            Ok(count) => Some(count),
            Err(err) => {
                tracing::warn!(table = kind.table(), error = %err, "Catalog table unreachable");
                None
            }
        };
        catalogs.push(CatalogHealth {
            catalog: kind.entity_name(),
            table: kind.table(),
            items,
        });
    }

    let status = if catalogs.iter().all(|c| c.items.is_some()) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalogs,
    })
}
