//! Reusable HTML components for the HTMX + Tailwind search UI
//!
//! Components are server-rendered HTML fragments used both in the full page
//! and as HTMX partial updates.

pub mod layout;
pub mod result_card;
pub mod results;
pub mod search_control;

// Re-export main component functions
pub use layout::{escape_html, page_header};
pub use result_card::result_card;
pub use results::{RESULTS_ID, results_region};
pub use search_control::search_control;
