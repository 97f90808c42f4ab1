//! JSON API handlers for external clients

use axum::extract::{Path, Query, State};
use axum::response::Json;
use marquee_core::screen::ScreenSnapshot;
use marquee_core::{CatalogEntry, SearchQuery, TypeFilter};
use serde::Deserialize;

use super::{WebError, lookup_session};
use crate::server::AppState;

/// Query parameters of `/api/search`, named like the catalog's own.
#[derive(Debug, Deserialize)]
pub struct ApiSearchParams {
    /// Search text
    pub s: Option<String>,
    /// Optional type filter
    #[serde(rename = "type")]
    pub filter: Option<String>,
}

/// One-shot catalog search without a screen session.
///
/// # Errors
/// - `WebError::BadRequest` - Missing or blank `s`
/// - `WebError::Catalog` - Invalid `type` or a failed catalog request
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<ApiSearchParams>,
) -> Result<Json<Vec<CatalogEntry>>, WebError> {
    let text = params
        .s
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| WebError::BadRequest {
            reason: "missing search text parameter 's'".to_string(),
        })?;

    let filter: TypeFilter = params.filter.as_deref().unwrap_or_default().parse()?;
    let query = SearchQuery::new(text, filter);

    tracing::debug!(text = %query.text, filter = %query.filter, "API search");
    let entries = state.catalog.search(&query).await?;
    Ok(Json(entries))
}

/// Latest snapshot of a screen session.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn api_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScreenSnapshot>, WebError> {
    let (_, handle) = lookup_session(&state, &id).await?;
    Ok(Json(handle.snapshot()))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
