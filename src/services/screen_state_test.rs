#[cfg(test)]
mod tests {
    use crate::catalog::CATALOG;
    use crate::services::screen_state::ScreenState;
    use leptos::prelude::*;

    #[test]
    fn test_screen_state_defaults() {
        let state = ScreenState::new();
        assert_eq!(state.search_query.get(), "");
        assert_eq!(state.match_count(), CATALOG.len());
    }

    #[test]
    fn test_set_query_narrows_filtered_view() {
        let state = ScreenState::new();
        state.set_query("cooperative".to_string());
        let filtered = state.filtered.get();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Integrator");
    }

    #[test]
    fn test_query_case_does_not_change_results() {
        let state = ScreenState::new();
        state.set_query("DECISIVE".to_string());
        let upper = state.filtered.get();
        state.set_query("decisive".to_string());
        let lower = state.filtered.get();
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].title, "Driver");
    }

    #[test]
    fn test_clear_query_restores_full_catalog() {
        let state = ScreenState::new();
        state.set_query("cooperative".to_string());
        assert_eq!(state.match_count(), 1);

        state.clear_query();
        assert_eq!(state.search_query.get(), "");
        assert_eq!(state.match_count(), CATALOG.len());

        // Original order survives the round trip
        let filtered = state.filtered.get();
        for (got, want) in filtered.iter().zip(CATALOG.iter()) {
            assert_eq!(got.title, want.title);
        }
    }

    #[test]
    fn test_unmatched_query_yields_empty_view() {
        let state = ScreenState::new();
        state.set_query("no such description".to_string());
        assert_eq!(state.match_count(), 0);
    }
}
