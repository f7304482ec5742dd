use leptos::prelude::*;

/// Screen header with the app title
#[component]
pub fn TitleBar(
    /// Title text
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <header class="flex justify-between items-center px-4 pt-4">
            <h1 class="text-xl font-bold text-zinc-900">{title}</h1>
        </header>
    }
}
