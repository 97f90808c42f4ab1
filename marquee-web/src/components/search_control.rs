//! Search control markup - text field, search button and type filter radios
//!
//! The text field reports every change to the session without searching.
//! Enter, the button and the radios each post their event together with the
//! current text, then swap the results region with the answer.

use marquee_core::catalog::TypeFilter;
use marquee_core::screen::{ENTER_KEY, SearchControl};

use super::layout::{button, text_input};
use super::results::RESULTS_ID;
use crate::sessions::SessionId;

const QUERY_INPUT_ID: &str = "query-input";

/// Attributes shared by every request that replaces the results region.
fn swap_results_attrs(session: SessionId, endpoint: &str) -> String {
    format!(
        r##"hx-post="/htmx/sessions/{session}/{endpoint}" hx-include="#{QUERY_INPUT_ID}" hx-target="#{RESULTS_ID}" hx-swap="outerHTML" hx-sync="#search-screen:replace""##
    )
}

/// Renders the search control for a session.
pub fn search_control(session: SessionId, control: &SearchControl) -> String {
    let text_attrs = format!(
        r#"hx-post="/htmx/sessions/{session}/text" hx-trigger="input changed delay:150ms" hx-swap="none""#
    );

    let input = text_input(
        QUERY_INPUT_ID,
        "text",
        control.text(),
        "Search movies and series...",
        &text_attrs,
    );

    // Kept outside the row so the input and button do not inherit its trigger.
    let enter_listener = format!(
        r##"<span class="hidden" {} hx-trigger="keydown[key=='{ENTER_KEY}'] from:#{QUERY_INPUT_ID}" hx-vals='{{"key": "{ENTER_KEY}"}}'></span>"##,
        swap_results_attrs(session, "key")
    );

    let search_attrs = format!(
        r#"hx-trigger="click" {}"#,
        swap_results_attrs(session, "search")
    );
    let search_button = button("Search", "primary", Some(search_attrs.as_str()));

    let filters: String = TypeFilter::ALL
        .iter()
        .map(|filter| filter_radio(session, *filter, control.filter() == *filter))
        .collect();

    format!(
        r#"<div id="search-control" class="mb-8">
            <div class="flex space-x-4">
                {input}
                {search_button}
            </div>
            {enter_listener}
            <div class="flex items-center space-x-6 mt-4" role="radiogroup" aria-label="Type filter">
                {filters}
            </div>
        </div>"#
    )
}

fn filter_radio(session: SessionId, filter: TypeFilter, checked: bool) -> String {
    let checked = if checked { "checked" } else { "" };
    let value = filter.as_str();
    let label = filter.label();

    format!(
        r#"<label class="flex items-center space-x-2 text-gray-300 cursor-pointer">
            <input type="radio" name="type" value="{value}" {checked}
                   class="accent-marquee-500"
                   hx-trigger="change" {attrs} />
            <span>{label}</span>
        </label>"#,
        attrs = swap_results_attrs(session, "filter")
    )
}
