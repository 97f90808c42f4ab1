//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use marquee_core::CatalogError;
use marquee_core::screen::ScreenError;
use serde_json::json;

use crate::components::results::expired_region;
use crate::sessions::SessionId;
use crate::server::AppState;

// Re-export handler functions
pub use api::{ApiSearchParams, api_search, api_session, health};
pub use htmx::{
    FilterForm, KeyForm, TextForm, control_filter, control_key, control_search, control_text,
    results_region,
};

/// Errors returned by web handlers.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Malformed, unknown or evicted session id
    #[error("Session not found: {id}")]
    SessionNotFound {
        /// Id as it appeared in the request path
        id: String,
    },

    /// The session's screen stopped while handling the request
    #[error("Search screen stopped: {0}")]
    Screen(#[from] ScreenError),

    /// Request parameters could not be used
    #[error("Invalid request: {reason}")]
    BadRequest {
        /// What was wrong with the request
        reason: String,
    },

    /// One-shot catalog search failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            // A session evicted between lookup and dispatch looks the same to the browser.
            WebError::SessionNotFound { .. } | WebError::Screen(_) => {
                (StatusCode::NOT_FOUND, Html(expired_region())).into_response()
            }
            WebError::BadRequest { reason } => (StatusCode::BAD_REQUEST, reason).into_response(),
            WebError::Catalog(error) => {
                let status = match error {
                    CatalogError::InvalidTypeFilter { .. } => StatusCode::BAD_REQUEST,
                    CatalogError::MissingApiKey | CatalogError::InvalidBaseUrl { .. } => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, Json(json!({ "error": error.user_message() }))).into_response()
            }
        }
    }
}

/// Resolves a session id from the request path.
///
/// # Errors
/// - `WebError::SessionNotFound` - The id is malformed or no longer registered
pub(crate) async fn lookup_session(
    state: &AppState,
    raw_id: &str,
) -> Result<(SessionId, marquee_core::SearchScreenHandle), WebError> {
    let not_found = || WebError::SessionNotFound {
        id: raw_id.to_string(),
    };

    let id: SessionId = raw_id.parse().map_err(|_| not_found())?;
    let handle = state.sessions.get(id).await.ok_or_else(not_found)?;
    Ok((id, handle))
}
