//! Result card - one catalog entry

use marquee_core::catalog::CatalogEntry;

use super::layout::escape_html;

/// Renders one catalog entry as a poster card.
///
/// The poster URL is used exactly as the catalog sent it, "N/A" included.
/// The entry id becomes the card's key so the grid keeps one card per id.
pub fn result_card(entry: &CatalogEntry) -> String {
    let id = escape_html(&entry.id);
    let title = escape_html(&entry.title);
    let year = escape_html(&entry.year);
    let kind = escape_html(entry.kind.as_str());
    let poster = escape_html(&entry.poster_url);

    format!(
        r#"<div class="result-card bg-gray-800 border border-gray-700 rounded-lg overflow-hidden" data-key="{id}">
            <img src="{poster}" alt="{title}" loading="lazy" class="w-full h-80 object-cover bg-gray-700" />
            <div class="p-4">
                <h5 class="text-white font-semibold leading-tight">{title}</h5>
                <p class="text-gray-400 text-sm mt-1">{year}</p>
                <p class="text-gray-500 text-xs uppercase tracking-wide mt-1">{kind}</p>
            </div>
        </div>"#
    )
}
