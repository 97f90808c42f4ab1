//! Results region - loading indicator, result grid or failure notice

use std::time::Duration;

use marquee_core::screen::ScreenView;

use super::layout::escape_html;
use super::result_card::result_card;
use crate::sessions::SessionId;

/// DOM id of the results region; every control request swaps it.
pub const RESULTS_ID: &str = "results";

/// Renders the results region for a session's current view.
///
/// While loading, the region asks for itself again after `poll_interval`
/// and replaces itself with the answer, so the grid appears as soon as the
/// screen settles. Settled regions stop polling.
pub fn results_region(session: SessionId, view: &ScreenView, poll_interval: Duration) -> String {
    match view {
        ScreenView::Loading => format!(
            r##"<div id="{RESULTS_ID}" data-state="loading"
                   hx-get="/htmx/sessions/{session}/results"
                   hx-trigger="load delay:{delay}ms"
                   hx-sync="#search-screen:drop"
                   hx-swap="outerHTML">
                {loader}
            </div>"##,
            delay = poll_interval.as_millis(),
            loader = loader()
        ),
        ScreenView::Success(entries) if entries.is_empty() => format!(
            r#"<div id="{RESULTS_ID}" data-state="empty" class="text-center py-12">
                <div class="text-5xl mb-4">🎬</div>
                <p class="text-gray-400">No results. Try another title or filter.</p>
            </div>"#
        ),
        ScreenView::Success(entries) => {
            let cards: String = entries.iter().map(result_card).collect();
            format!(
                r#"<div id="{RESULTS_ID}" data-state="results" data-count="{count}"
                       class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">
                    {cards}
                </div>"#,
                count = entries.len()
            )
        }
        ScreenView::Failure(message) => format!(
            r#"<div id="{RESULTS_ID}" data-state="failure" class="text-center py-12">
                <div class="text-5xl mb-4">⚠️</div>
                <p class="text-red-400">{message}</p>
                <p class="text-gray-500 text-sm mt-2">Adjust the search and try again.</p>
            </div>"#,
            message = escape_html(message)
        ),
    }
}

/// Renders the region shown for a session that no longer exists.
pub fn expired_region() -> String {
    format!(
        r#"<div id="{RESULTS_ID}" data-state="expired" class="text-center py-12">
            <p class="text-gray-400">This search session has expired.</p>
            <a href="/" class="text-marquee-400 hover:text-marquee-300">Reload to start a new search</a>
        </div>"#
    )
}

fn loader() -> &'static str {
    r#"<div class="flex justify-center py-16" role="status" aria-label="Loading">
        <div class="w-12 h-12 border-4 border-gray-700 border-t-marquee-500 rounded-full animate-spin"></div>
    </div>"#
}
