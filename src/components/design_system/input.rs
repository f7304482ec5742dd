use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: Signal<String>,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full p-2 rounded-lg bg-white text-zinc-900 border border-zinc-200 focus:border-zinc-400 focus:ring-1 focus:ring-zinc-300 outline-none transition-colors placeholder-zinc-400";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(ref callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            class=full_class
            type="text"
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            on:input=handle_input
        />
    }
}
