use leptos::prelude::*;

use crate::catalog::CATALOG;
use crate::components::personality_list::PersonalityList;
use crate::components::search_box::SearchBox;
use crate::components::title_bar::TitleBar;
use crate::services::screen_state::provide_screen_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide shared screen state before any child renders
    provide_screen_state();

    log::info!("Personality catalog loaded: {} types", CATALOG.len());

    view! {
        <div class="flex flex-col h-screen bg-zinc-100">
            <TitleBar title="Personality App" />
            <SearchBox />
            <PersonalityList />
        </div>
    }
}
