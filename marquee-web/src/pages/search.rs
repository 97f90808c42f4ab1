//! Search page - mounts a search screen and renders its first snapshot

use axum::extract::State;
use axum::response::Html;

use crate::components::{page_header, results_region, search_control};
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the search page.
///
/// Every request mounts a fresh screen session, so the page opens with the
/// default query already loading.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let (session, handle) = state.sessions.mount().await;
    let snapshot = handle.snapshot();

    let content = format!(
        r#"{header}
        <div id="search-screen" data-session="{session}">
            {control}
            {results}
        </div>"#,
        header = page_header("Search", Some("Find movies and series by title")),
        control = search_control(session, &snapshot.control),
        results = results_region(session, &snapshot.view, state.config.server.poll_interval),
    );

    render_page("Search", &content)
}
