//! Screen State Tests
//!
//! Browser-side tests for the search query signal and the derived
//! filtered view of the catalog.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use personality_app::catalog::CATALOG;
use personality_app::services::screen_state::ScreenState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Default State Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_screen_state_new() {
    let state = ScreenState::new();

    assert_eq!(state.search_query.get(), "");
    assert_eq!(state.match_count(), CATALOG.len());
}

#[wasm_bindgen_test]
fn test_screen_state_default() {
    let state = ScreenState::default();

    assert_eq!(state.search_query.get(), "");
    assert_eq!(state.match_count(), CATALOG.len());
}

// ============================================================================
// Query / Filter Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_keystroke_updates_filtered_view() {
    let state = ScreenState::new();

    // Typing progressively narrows the list
    state.set_query("c".to_string());
    let after_one = state.match_count();
    assert!(after_one <= CATALOG.len());

    state.set_query("cooperative".to_string());
    let filtered = state.filtered.get();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Integrator");
}

#[wasm_bindgen_test]
fn test_query_is_case_insensitive() {
    let state = ScreenState::new();

    state.set_query("GOAL-ORIENTED".to_string());
    let upper: Vec<&str> = state.filtered.get().iter().map(|r| r.title).collect();

    state.set_query("goal-oriented".to_string());
    let lower: Vec<&str> = state.filtered.get().iter().map(|r| r.title).collect();

    assert_eq!(upper, lower);
    assert_eq!(upper, vec!["Driver"]);
}

#[wasm_bindgen_test]
fn test_clear_restores_full_catalog_in_order() {
    let state = ScreenState::new();

    state.set_query("cooperative".to_string());
    assert_eq!(state.match_count(), 1);

    state.clear_query();
    let filtered = state.filtered.get();
    assert_eq!(filtered.len(), CATALOG.len());
    for (got, want) in filtered.iter().zip(CATALOG.iter()) {
        assert_eq!(got.title, want.title);
    }
}

#[wasm_bindgen_test]
fn test_unmatched_query_gives_empty_view() {
    let state = ScreenState::new();

    state.set_query("zzzz".to_string());
    assert_eq!(state.match_count(), 0);
}
