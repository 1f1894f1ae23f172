//! Active-filter chips and the colour table they are tinted with.

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::filters::{clear_date_range, toggle_facet_value};
use crate::models::{ChipKind, DateRange, Facet, FilterState};


/// Chip tint. Serialized as the colour key the view layer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Orange,
    Red,
    Blue,
    Purple,
    Teal,
    Pink,
    Yellow,
    Indigo,
    Gray,
}

const DATE_COLOR: Color = Color::Indigo;
const FALLBACK_COLOR: Color = Color::Gray;

const DEFAULT_COLORS: &[(ChipKind, &str, Color)] = &[
    (ChipKind::Assistant, "J'Apprends", Color::Blue),
    (ChipKind::Assistant, "Recherche", Color::Purple),
    (ChipKind::Assistant, "Accueil", Color::Teal),
    (ChipKind::Assistant, "Autre", Color::Gray),
    (ChipKind::Subject, "Maths", Color::Orange),
    (ChipKind::Subject, "Français", Color::Blue),
    (ChipKind::Subject, "Sciences", Color::Green),
    (ChipKind::Subject, "Histoire", Color::Yellow),
    (ChipKind::Subject, "Anglais", Color::Pink),
    (ChipKind::Difficulty, "Facile", Color::Green),
    (ChipKind::Difficulty, "Moyen", Color::Orange),
    (ChipKind::Difficulty, "Difficile", Color::Red),
];

/// One configured entry replacing or extending the default table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOverride {
    pub kind: ChipKind,
    pub value: String,
    pub color: Color,
}

/// `kind × value → colour` lookup with an explicit gray fallback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    overrides: Vec<ColorOverride>,
}

impl Palette {
    pub fn with_overrides(mut self, overrides: &[ColorOverride]) -> Self {
        self.overrides.extend_from_slice(overrides);
        self
    }

    pub fn color_for(&self, kind: ChipKind, value: &str) -> Color {
        if kind == ChipKind::Date {
            return DATE_COLOR;
        }

        // last override wins
        self.overrides
            .iter()
            .rev()
            .find(|o| o.kind == kind && o.value == value)
            .map(|o| o.color)
            .or_else(|| {
                DEFAULT_COLORS
                    .iter()
                    .find(|(k, v, _)| *k == kind && *v == value)
                    .map(|(_, _, color)| *color)
            })
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// How a chip undoes its own selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChipRemoval {
    ClearDateRange,
    Toggle { facet: Facet, value: String },
}

impl ChipRemoval {
    pub fn apply(&self, state: &FilterState) -> FilterState {
        match self {
            ChipRemoval::ClearDateRange => clear_date_range(state),
            ChipRemoval::Toggle { facet, value } => toggle_facet_value(state, *facet, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub kind: ChipKind,
    pub label: String,
    pub color: Color,
    pub removal: ChipRemoval,
}

/// Date chip first, then one chip per selected value, facets in fixed order
pub fn project(state: &FilterState, palette: &Palette) -> Vec<FilterChip> {
    let mut chips = Vec::with_capacity(crate::filters::count_active(state));

    if let Some(label) = date_label(&state.date_range) {
        chips.push(FilterChip {
            kind: ChipKind::Date,
            label,
            color: palette.color_for(ChipKind::Date, ""),
            removal: ChipRemoval::ClearDateRange,
        });
    }

    for facet in Facet::ALL {
        let kind = ChipKind::from(facet);
        chips.extend(state.selection(facet).iter().map(|value| FilterChip {
            kind,
            label: value.to_string(),
            color: palette.color_for(kind, value),
            removal: ChipRemoval::Toggle {
                facet,
                value: value.to_string(),
            },
        }));
    }

    chips
}

fn format_day(date: NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized("%-d %b %Y", Locale::fr_FR)
        .to_string()
}

fn date_label(range: &DateRange) -> Option<String> {
    match (range.start, range.end) {
        (Some(start), Some(end)) => Some(format!("{} - {}", format_day(start), format_day(end))),
        (Some(start), None) => Some(format_day(start)),
        (None, Some(end)) => Some(format!("- {}", format_day(end))),
        (None, None) => None,
    }
}
