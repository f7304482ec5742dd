//! Personality List Component
//!
//! Renders one card per filtered catalog record, in catalog order, and a
//! quiet placeholder when nothing matches.

use leptos::prelude::*;

use crate::components::personality_card::PersonalityCard;
use crate::services::screen_state::use_screen_state;
use crate::utils::formatting::format_match_count;

/// Scrollable card list over the filtered catalog
#[component]
pub fn PersonalityList() -> impl IntoView {
    let state = use_screen_state();
    let filtered = state.filtered;

    view! {
        <div class="flex-1 overflow-y-auto px-4 pb-4">
            <div class="py-2 text-xs text-zinc-400">
                {move || format_match_count(filtered.get().len())}
            </div>

            <div class="flex flex-col gap-4">
                <For
                    each=move || filtered.get()
                    key=|record| record.title
                    children=move |record| {
                        view! { <PersonalityCard personality=record /> }
                    }
                />
            </div>

            <Show when=move || filtered.get().is_empty()>
                <div class="py-12 text-center text-sm text-zinc-400">
                    "No personality types match your search"
                </div>
            </Show>
        </div>
    }
}
