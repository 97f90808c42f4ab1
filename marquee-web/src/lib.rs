//! Marquee Web - browser search UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the search screen as server-rendered HTML with HTMX partial
//! updates. Every page load mounts its own search screen session; control
//! events posted by the browser drive that session and the results region is
//! re-rendered from its latest snapshot.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod sessions;

// Re-export main types
pub use server::{AppState, build_router, run_server};
pub use sessions::{SessionId, SessionRegistry};
