//! Personality Card Component
//!
//! One catalog record rendered as a colored card: keyword chips, title,
//! and a description block that fades in and out behind a caret toggle.
//! Expansion is local to the card and resets when the card unmounts.

use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_DOWN, CARET_UP};

use crate::catalog::PersonalityType;
use crate::components::design_system::{Badge, BadgeVariant, Card, CardBody};

/// Expandable card for one personality record
#[component]
pub fn PersonalityCard(
    /// The catalog record to display
    personality: &'static PersonalityType,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let palette = personality.palette;

    let description_class = move || {
        let visibility = if expanded.get() {
            "mt-2 max-h-40 opacity-100"
        } else {
            "max-h-0 opacity-0"
        };
        format!(
            "text-base leading-relaxed overflow-hidden transition-all duration-500 {} {}",
            palette.content_class(),
            visibility
        )
    };

    view! {
        <Card class=palette.surface_class()>
            <CardBody>
                <div class="flex items-center gap-2">
                    <Badge class=palette.badge_class()>{personality.keyword1}</Badge>
                    <Badge variant=BadgeVariant::Light>{personality.keyword2}</Badge>

                    <span class="flex-1"></span>

                    <ExpandToggle expanded=expanded class=palette.content_class() />
                </div>

                <h3 class=format!("mt-3 text-lg font-bold {}", palette.content_class())>
                    {personality.title}
                </h3>

                <p class=description_class>
                    {personality.description}
                </p>
            </CardBody>
        </Card>
    }
}

/// Caret button that flips the card's expanded flag
#[component]
fn ExpandToggle(
    expanded: RwSignal<bool>,
    /// Text color classes inherited from the card palette
    #[prop(into)]
    class: String,
) -> impl IntoView {
    view! {
        <button
            class=format!("p-1.5 rounded-full hover:bg-black/10 transition-colors {class}")
            aria-label=move || {
                if expanded.get() { "Collapse description" } else { "Expand description" }
            }
            aria-expanded=move || expanded.get().to_string()
            on:click=move |_| expanded.update(|e| *e = !*e)
        >
            {move || {
                if expanded.get() {
                    view! { <Icon icon=CARET_UP size="18px" /> }.into_any()
                } else {
                    view! { <Icon icon=CARET_DOWN size="18px" /> }.into_any()
                }
            }}
        </button>
    }
}
