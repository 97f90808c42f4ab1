//! HTMX handlers driving a mounted search screen
//!
//! Each control request carries the current text and submits it together
//! with the triggering event, so the search uses what the user sees even
//! when the debounced text update is still on its way.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use marquee_core::TypeFilter;
use marquee_core::screen::{ControlEvent, ScreenSnapshot};
use serde::Deserialize;

use super::{WebError, lookup_session};
use crate::components;
use crate::server::AppState;
use crate::sessions::SessionId;

/// Text field update.
#[derive(Debug, Deserialize)]
pub struct TextForm {
    /// Current contents of the text field
    #[serde(default)]
    pub text: String,
}

/// Key press in the text field.
#[derive(Debug, Deserialize)]
pub struct KeyForm {
    /// Current contents of the text field
    #[serde(default)]
    pub text: String,
    /// Name of the pressed key
    pub key: String,
}

/// Type filter selection.
#[derive(Debug, Deserialize)]
pub struct FilterForm {
    /// Current contents of the text field
    #[serde(default)]
    pub text: String,
    /// Selected filter: all, movie or series
    #[serde(rename = "type")]
    pub filter: String,
}

/// Records a text change; never searches.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn control_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TextForm>,
) -> Result<StatusCode, WebError> {
    let (_, handle) = lookup_session(&state, &id).await?;
    handle.dispatch(ControlEvent::TextChanged(form.text)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handles a key press; Enter searches for the current text.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn control_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<KeyForm>,
) -> Result<Html<String>, WebError> {
    let (session, handle) = lookup_session(&state, &id).await?;
    let snapshot = handle.submit(form.text, ControlEvent::KeyPressed(form.key)).await?;
    Ok(render_results(&state, session, &snapshot))
}

/// Handles the search button.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn control_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TextForm>,
) -> Result<Html<String>, WebError> {
    let (session, handle) = lookup_session(&state, &id).await?;
    let snapshot = handle.submit(form.text, ControlEvent::SearchClicked).await?;
    Ok(render_results(&state, session, &snapshot))
}

/// Handles a type filter selection, searching with the new filter.
///
/// # Errors
/// - `WebError::BadRequest` - The filter value is not all, movie or series
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn control_filter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<FilterForm>,
) -> Result<Html<String>, WebError> {
    let filter: TypeFilter = form.filter.parse().map_err(|e: marquee_core::CatalogError| {
        WebError::BadRequest {
            reason: e.user_message(),
        }
    })?;

    let (session, handle) = lookup_session(&state, &id).await?;
    let snapshot = handle.submit(form.text, ControlEvent::FilterSelected(filter)).await?;
    Ok(render_results(&state, session, &snapshot))
}

/// Renders the results region from the session's latest snapshot.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown or evicted session
pub async fn results_region(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let (session, handle) = lookup_session(&state, &id).await?;
    Ok(render_results(&state, session, &handle.snapshot()))
}

fn render_results(state: &AppState, session: SessionId, snapshot: &ScreenSnapshot) -> Html<String> {
    Html(components::results_region(
        session,
        &snapshot.view,
        state.config.server.poll_interval,
    ))
}
