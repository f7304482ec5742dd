//! Personality type catalog
//!
//! The static, build-time list of personality records shown on screen,
//! plus the substring filter that drives the search box. The catalog is
//! created once and never mutated; catalog order is meaningful and every
//! operation preserves it.

use serde::Serialize;

/// Visual identity for a personality card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardPalette {
    Amber,
    Sky,
    Rose,
    Emerald,
    Violet,
    Slate,
}

impl CardPalette {
    /// Card surface (background) classes
    pub fn surface_class(&self) -> &'static str {
        match self {
            CardPalette::Amber => "bg-amber-100",
            CardPalette::Sky => "bg-sky-100",
            CardPalette::Rose => "bg-rose-100",
            CardPalette::Emerald => "bg-emerald-100",
            CardPalette::Violet => "bg-violet-100",
            CardPalette::Slate => "bg-slate-200",
        }
    }

    /// Text color for title, description and the caret toggle
    pub fn content_class(&self) -> &'static str {
        match self {
            CardPalette::Amber => "text-amber-900",
            CardPalette::Sky => "text-sky-900",
            CardPalette::Rose => "text-rose-900",
            CardPalette::Emerald => "text-emerald-900",
            CardPalette::Violet => "text-violet-900",
            CardPalette::Slate => "text-slate-800",
        }
    }

    /// Background for the tinted keyword chip
    pub fn badge_class(&self) -> &'static str {
        match self {
            CardPalette::Amber => "bg-amber-200 text-amber-900",
            CardPalette::Sky => "bg-sky-200 text-sky-900",
            CardPalette::Rose => "bg-rose-200 text-rose-900",
            CardPalette::Emerald => "bg-emerald-200 text-emerald-900",
            CardPalette::Violet => "bg-violet-200 text-violet-900",
            CardPalette::Slate => "bg-slate-300 text-slate-800",
        }
    }
}

/// One record of the personality catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalityType {
    pub title: &'static str,
    pub description: &'static str,
    pub keyword1: &'static str,
    pub keyword2: &'static str,
    pub palette: CardPalette,
}

/// The full catalog, in display order. Titles are unique and double as
/// list keys.
pub const CATALOG: &[PersonalityType] = &[
    PersonalityType {
        title: "Driver",
        description: "Goal-oriented and decisive",
        keyword1: "Direct",
        keyword2: "Bold",
        palette: CardPalette::Rose,
    },
    PersonalityType {
        title: "Integrator",
        description: "Caring and cooperative",
        keyword1: "Empathic",
        keyword2: "Steady",
        palette: CardPalette::Emerald,
    },
    PersonalityType {
        title: "Pioneer",
        description: "Outgoing and spontaneous, drawn to whatever is new",
        keyword1: "Creative",
        keyword2: "Energetic",
        palette: CardPalette::Amber,
    },
    PersonalityType {
        title: "Guardian",
        description: "Methodical and dependable, with an eye for detail",
        keyword1: "Thorough",
        keyword2: "Loyal",
        palette: CardPalette::Sky,
    },
    PersonalityType {
        title: "Analyst",
        description: "Logical and data-driven, weighing every option before acting",
        keyword1: "Precise",
        keyword2: "Curious",
        palette: CardPalette::Violet,
    },
    PersonalityType {
        title: "Connector",
        description: "Sociable and persuasive, building bridges between people",
        keyword1: "Warm",
        keyword2: "Expressive",
        palette: CardPalette::Amber,
    },
    PersonalityType {
        title: "Visionary",
        description: "Imaginative big-picture thinker chasing what could be",
        keyword1: "Inventive",
        keyword2: "Restless",
        palette: CardPalette::Violet,
    },
    PersonalityType {
        title: "Stabilizer",
        description: "Calm and consistent, keeping the group grounded",
        keyword1: "Patient",
        keyword2: "Reliable",
        palette: CardPalette::Slate,
    },
];

/// Case-insensitive substring filter over record descriptions.
///
/// An empty query returns the full catalog; order is always catalog order.
pub fn filter_catalog<'a>(
    catalog: &'a [PersonalityType],
    query: &str,
) -> Vec<&'a PersonalityType> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|record| record.description.to_lowercase().contains(&needle))
        .collect()
}
