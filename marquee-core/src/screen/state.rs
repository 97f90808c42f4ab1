//! Screen state machine.
//!
//! Every transition consumes the current [`ScreenState`] and returns the next
//! one. Requests are tagged with a [`RequestToken`]; only the outcome of the
//! most recently issued request may change what the screen shows.

use std::fmt;

use serde::Serialize;

use super::control::SearchControl;
use crate::catalog::{CatalogEntry, CatalogError, SearchQuery};

/// Monotonically increasing identifier of an issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the results region shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ScreenView {
    /// A request is outstanding.
    Loading,
    /// The latest request succeeded; may be empty when nothing matched.
    Success(Vec<CatalogEntry>),
    /// The latest request failed; carries a message for the user.
    Failure(String),
}

impl ScreenView {
    /// True while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenView::Loading)
    }
}

/// Search the screen wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub query: SearchQuery,
}

/// Result of a performed search, tagged with the token it was issued under.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub token: RequestToken,
    pub result: Result<Vec<CatalogEntry>, CatalogError>,
}

/// Whether an outcome changed the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The outcome belonged to the latest request and is now shown.
    Current,
    /// The outcome belonged to a superseded request and was dropped.
    Stale,
}

/// Authoritative result and loading state of a search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    view: ScreenView,
    latest: Option<RequestToken>,
    issued: u64,
    last_query: Option<SearchQuery>,
}

impl ScreenState {
    /// State of a screen that has not issued anything yet.
    ///
    /// Starts out loading: mounting a screen issues its first search at once.
    pub fn new() -> Self {
        Self {
            view: ScreenView::Loading,
            latest: None,
            issued: 0,
            last_query: None,
        }
    }

    /// Issues a new search, superseding any outstanding one.
    pub fn issue(self, query: SearchQuery) -> (Self, FetchRequest) {
        let token = RequestToken(self.issued + 1);
        let next = Self {
            view: ScreenView::Loading,
            latest: Some(token),
            issued: token.0,
            last_query: Some(query.clone()),
        };
        (next, FetchRequest { token, query })
    }

    /// Applies a search outcome if it belongs to the latest request.
    pub fn apply(self, outcome: FetchOutcome) -> (Self, Applied) {
        if self.latest != Some(outcome.token) || !self.view.is_loading() {
            return (self, Applied::Stale);
        }

        let view = match outcome.result {
            Ok(entries) => ScreenView::Success(entries),
            Err(error) => ScreenView::Failure(error.user_message()),
        };
        (Self { view, ..self }, Applied::Current)
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Entries currently shown; empty while loading or after a failure.
    pub fn results(&self) -> &[CatalogEntry] {
        match &self.view {
            ScreenView::Success(entries) => entries,
            _ => &[],
        }
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    pub fn last_query(&self) -> Option<&SearchQuery> {
        self.last_query.as_ref()
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a renderer needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSnapshot {
    pub control: SearchControl,
    pub view: ScreenView,
    pub latest: Option<RequestToken>,
    pub last_query: Option<SearchQuery>,
}

impl ScreenSnapshot {
    /// Builds a snapshot from the control and screen state.
    pub fn capture(control: &SearchControl, state: &ScreenState) -> Self {
        Self {
            control: control.clone(),
            view: state.view().clone(),
            latest: state.latest_token(),
            last_query: state.last_query().cloned(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }
}
