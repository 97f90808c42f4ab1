//! Search control: the query text field, the search button and the type
//! filter radio group.
//!
//! The control owns only its input state. It never touches the screen state;
//! when a search should run it emits [`SearchRequested`] and the screen
//! decides what to do with it.

use serde::Serialize;

use crate::catalog::{SearchQuery, TypeFilter};

/// Key that submits the query from the text field.
pub const ENTER_KEY: &str = "Enter";

/// User input reaching the search control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The text field now holds this value.
    TextChanged(String),
    /// A key went down while the text field had focus.
    KeyPressed(String),
    /// The search button was activated.
    SearchClicked,
    /// One of the type filter radios was selected.
    FilterSelected(TypeFilter),
}

/// Event raised by the control when a search should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequested(pub SearchQuery);

/// Input state of the search control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchControl {
    text: String,
    filter: TypeFilter,
}

impl SearchControl {
    /// Creates a control pre-filled with `initial`.
    pub fn new(initial: SearchQuery) -> Self {
        Self {
            text: initial.text,
            filter: initial.filter,
        }
    }

    /// Current contents of the text field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently selected type filter.
    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    /// Query a search triggered right now would run.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.text.clone(), self.filter)
    }

    /// Applies one input event and returns the next control state.
    ///
    /// A filter selection updates the filter before the request is built, so
    /// the emitted query always carries the newly selected filter.
    pub fn handle(self, event: ControlEvent) -> (Self, Option<SearchRequested>) {
        match event {
            ControlEvent::TextChanged(text) => (Self { text, ..self }, None),
            ControlEvent::KeyPressed(key) if key == ENTER_KEY => {
                let request = SearchRequested(self.query());
                (self, Some(request))
            }
            ControlEvent::KeyPressed(_) => (self, None),
            ControlEvent::SearchClicked => {
                let request = SearchRequested(self.query());
                (self, Some(request))
            }
            ControlEvent::FilterSelected(filter) => {
                let next = Self { filter, ..self };
                let request = SearchRequested(next.query());
                (next, Some(request))
            }
        }
    }
}

impl Default for SearchControl {
    fn default() -> Self {
        Self::new(SearchQuery::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requested(text: &str, filter: TypeFilter) -> Option<SearchRequested> {
        Some(SearchRequested(SearchQuery::new(text, filter)))
    }

    #[test]
    fn test_text_change_does_not_search() {
        let (control, request) =
            SearchControl::default().handle(ControlEvent::TextChanged("batman".to_string()));

        assert_eq!(control.text(), "batman");
        assert_eq!(request, None);
    }

    #[test]
    fn test_enter_searches_with_current_input() {
        let control = SearchControl::default();
        let (control, _) = control.handle(ControlEvent::TextChanged("batman".to_string()));
        let (_, request) = control.handle(ControlEvent::KeyPressed(ENTER_KEY.to_string()));

        assert_eq!(request, requested("batman", TypeFilter::All));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let (control, request) =
            SearchControl::default().handle(ControlEvent::KeyPressed("a".to_string()));

        assert_eq!(request, None);
        assert_eq!(control, SearchControl::default());
    }

    #[test]
    fn test_button_searches_with_current_input() {
        let (_, request) = SearchControl::default().handle(ControlEvent::SearchClicked);
        assert_eq!(request, requested("panda", TypeFilter::All));
    }

    #[test]
    fn test_filter_selection_searches_with_new_filter() {
        let (control, request) =
            SearchControl::default().handle(ControlEvent::FilterSelected(TypeFilter::Movie));

        assert_eq!(control.filter(), TypeFilter::Movie);
        assert_eq!(request, requested("panda", TypeFilter::Movie));
    }

    #[test]
    fn test_series_then_all_restores_unfiltered_query() {
        let control = SearchControl::default();
        let (control, first) = control.handle(ControlEvent::FilterSelected(TypeFilter::Series));
        let (control, second) = control.handle(ControlEvent::FilterSelected(TypeFilter::All));

        assert_eq!(first, requested("panda", TypeFilter::Series));
        assert_eq!(second, requested("panda", TypeFilter::All));
        assert_eq!(control, SearchControl::default());
    }
}
