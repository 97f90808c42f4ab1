//! Search screen: the search control, the result/loading state machine and
//! the actor that performs catalog fetches for one mounted screen.

mod actor;
pub mod commands;
pub mod control;
pub mod handle;
pub mod state;

pub use actor::spawn_search_screen;
pub use control::{ControlEvent, ENTER_KEY, SearchControl, SearchRequested};
pub use handle::SearchScreenHandle;
pub use state::{
    Applied, FetchOutcome, FetchRequest, RequestToken, ScreenSnapshot, ScreenState, ScreenView,
};

/// Errors returned by [`SearchScreenHandle`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    /// The screen actor is no longer running.
    #[error("Search screen has shut down")]
    Shutdown,
}
