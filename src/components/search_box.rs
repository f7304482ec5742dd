//! Search Box Component
//!
//! Text input bound to the screen's search query. Filtering happens on
//! every keystroke; a clear control appears once the query is non-empty.

use leptos::prelude::*;
use phosphor_leptos::{Icon, MAGNIFYING_GLASS, X};

use crate::components::design_system::Input;
use crate::services::screen_state::use_screen_state;

/// Search input with leading icon and clear control
#[component]
pub fn SearchBox() -> impl IntoView {
    let state = use_screen_state();
    let query = state.search_query;

    view! {
        <div class="relative mx-4 mt-6">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-zinc-400 pointer-events-none z-10">
                <Icon icon=MAGNIFYING_GLASS size="18px" />
            </span>

            <Input value=query placeholder="Search" class="pl-10 pr-9" />

            <Show when=move || !query.get().is_empty()>
                <button
                    class="absolute right-3 top-1/2 -translate-y-1/2 p-1 rounded-full text-zinc-400 hover:text-zinc-600 hover:bg-zinc-100 transition-colors"
                    aria-label="Clear search"
                    on:click=move |_| state.clear_query()
                >
                    <Icon icon=X size="14px" />
                </button>
            </Show>
        </div>
    }
}
