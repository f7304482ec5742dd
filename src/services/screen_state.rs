//! Screen state for the personality explorer
//!
//! Owns the search query and derives the filtered view of the catalog.
//! The filtered list is a memo, never stored state, so it can only ever
//! disagree with the query for the duration of a single update.

use leptos::prelude::*;

use crate::catalog::{self, PersonalityType, CATALOG};

/// Reactive state shared by the search box and the list
#[derive(Clone, Copy)]
pub struct ScreenState {
    /// Current contents of the search box
    pub search_query: RwSignal<String>,
    /// Catalog records matching the query, in catalog order
    pub filtered: Memo<Vec<&'static PersonalityType>>,
}

impl ScreenState {
    pub fn new() -> Self {
        let search_query = RwSignal::new(String::new());
        let filtered = Memo::new(move |_| {
            catalog::filter_catalog(CATALOG, &search_query.get())
        });
        Self {
            search_query,
            filtered,
        }
    }

    pub fn set_query(&self, query: String) {
        self.search_query.set(query);
    }

    pub fn clear_query(&self) {
        self.search_query.set(String::new());
    }

    pub fn match_count(&self) -> usize {
        self.filtered.get().len()
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the screen state to the component tree
pub fn provide_screen_state() {
    provide_context(ScreenState::new());
}

/// Access the screen state from any component below `App`
pub fn use_screen_state() -> ScreenState {
    expect_context::<ScreenState>()
}
