use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_deserializes_without_duplicates() {
        let selection: Selection =
            serde_json::from_str(r#"["Maths", "Histoire", "Maths"]"#).unwrap();

        let values: Vec<_> = selection.iter().collect();
        assert_eq!(values, vec!["Maths", "Histoire"]);
    }

    #[test]
    fn test_selection_serializes_as_plain_list() {
        let selection = Selection::default().toggled("Accueil").toggled("Recherche");
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"["Accueil","Recherche"]"#);
    }
}

/// Label used for activities that carry no assistant
pub const FALLBACK_ASSISTANT: &str = "Autre";

/// Learning activity record (supplied by the data layer, read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub assistant: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Display only
    #[serde(default)]
    pub score: Option<u32>,
    /// Display only
    #[serde(default)]
    pub title: Option<String>,
}

impl Activity {
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            assistant: None,
            subject: None,
            difficulty: None,
            score: None,
            title: None,
        }
    }

    pub fn with_assistant(mut self, assistant: impl Into<String>) -> Self {
        self.assistant = Some(assistant.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Value this activity exposes for a facet.
    /// Assistants fall back to "Autre"; subject and difficulty have no default.
    pub fn facet_value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Assistant => Some(self.assistant.as_deref().unwrap_or(FALLBACK_ASSISTANT)),
            Facet::Subject => self.subject.as_deref(),
            Facet::Difficulty => self.difficulty.as_deref(),
        }
    }
}

/// Independently filterable dimension of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Assistant,
    Subject,
    Difficulty,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Assistant, Facet::Subject, Facet::Difficulty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Assistant => "assistant",
            Facet::Subject => "subject",
            Facet::Difficulty => "difficulty",
        }
    }
}

/// Inclusive date bounds. Both set implies `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Start chosen, end still pending
    pub fn is_awaiting_end(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Order-preserving set of selected facet values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Selection(Vec<String>);

/// Keeps the first occurrence of each value
impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self(unique)
    }
}

impl Selection {
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Removes `value` if present, appends it otherwise
    pub fn toggled(&self, value: &str) -> Self {
        if self.contains(value) {
            Self(self.0.iter().filter(|v| *v != value).cloned().collect())
        } else {
            let mut values = self.0.clone();
            values.push(value.to_string());
            Self(values)
        }
    }
}

/// What the user wants to see. Ephemeral, owned by the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub date_range: DateRange,
    pub assistants: Selection,
    pub subjects: Selection,
    pub difficulties: Selection,
}

impl FilterState {
    pub fn selection(&self, facet: Facet) -> &Selection {
        match facet {
            Facet::Assistant => &self.assistants,
            Facet::Subject => &self.subjects,
            Facet::Difficulty => &self.difficulties,
        }
    }

    pub(crate) fn selection_mut(&mut self, facet: Facet) -> &mut Selection {
        match facet {
            Facet::Assistant => &mut self.assistants,
            Facet::Subject => &mut self.subjects,
            Facet::Difficulty => &mut self.difficulties,
        }
    }
}

/// Kind of an active-filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Date,
    Assistant,
    Subject,
    Difficulty,
}

impl From<Facet> for ChipKind {
    fn from(facet: Facet) -> Self {
        match facet {
            Facet::Assistant => ChipKind::Assistant,
            Facet::Subject => ChipKind::Subject,
            Facet::Difficulty => ChipKind::Difficulty,
        }
    }
}

/// Summary of the engine output handed to the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub active_filters: usize,
    pub total_items: usize,
    pub total_pages: usize,
}
