use serde::Serialize;

use crate::models::{Activity, Facet};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[test]
    fn test_resolve_dedups_in_first_seen_order() {
        let activities = vec![
            Activity::new("1", date(1))
                .with_assistant("Recherche")
                .with_subject("Maths")
                .with_difficulty("Moyen"),
            Activity::new("2", date(2))
                .with_assistant("J'Apprends")
                .with_subject("Français"),
            Activity::new("3", date(3))
                .with_assistant("Recherche")
                .with_subject("Maths")
                .with_difficulty("Facile"),
        ];

        let options = resolve(&activities);

        assert_eq!(options.assistants, vec!["Recherche", "J'Apprends"]);
        assert_eq!(options.subjects, vec!["Maths", "Français"]);
        assert_eq!(options.difficulties, vec!["Moyen", "Facile"]);
    }

    #[test]
    fn test_autre_only_when_an_assistant_is_missing() {
        let with_all = vec![Activity::new("1", date(1)).with_assistant("Accueil")];
        assert_eq!(resolve(&with_all).assistants, vec!["Accueil"]);

        let with_missing = vec![
            Activity::new("1", date(1)).with_assistant("Accueil"),
            Activity::new("2", date(2)),
            Activity::new("3", date(3)).with_assistant("Recherche"),
        ];
        assert_eq!(resolve(&with_missing).assistants, vec!["Accueil", "Autre", "Recherche"]);
    }

    #[test]
    fn test_missing_subject_adds_no_option() {
        let activities = vec![
            Activity::new("1", date(1)),
            Activity::new("2", date(2)).with_subject("Histoire"),
        ];
        let options = resolve(&activities);

        assert_eq!(options.subjects, vec!["Histoire"]);
        assert!(options.difficulties.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let options = resolve(&[]);
        assert_eq!(options, FacetOptions::default());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let subjects = vec!["Maths".to_string(), "Français".to_string(), "Sciences".to_string()];

        assert_eq!(search("MATH", &subjects), vec!["Maths"]);
        assert_eq!(search("ç", &subjects), vec!["Français"]);
        assert_eq!(search("s", &subjects), vec!["Maths", "Français", "Sciences"]);
        assert!(search("zz", &subjects).is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let assistants = vec!["Accueil".to_string(), "Recherche".to_string()];
        assert_eq!(search("  ", &assistants), vec!["Accueil", "Recherche"]);
    }
}

/// Pickable values for each facet, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub assistants: Vec<String>,
    pub subjects: Vec<String>,
    pub difficulties: Vec<String>,
}

impl FacetOptions {
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Assistant => &self.assistants,
            Facet::Subject => &self.subjects,
            Facet::Difficulty => &self.difficulties,
        }
    }
}

pub fn resolve(activities: &[Activity]) -> FacetOptions {
    FacetOptions {
        assistants: distinct(activities, Facet::Assistant),
        subjects: distinct(activities, Facet::Subject),
        difficulties: distinct(activities, Facet::Difficulty),
    }
}

fn distinct(activities: &[Activity], facet: Facet) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in activities.iter().filter_map(|a| a.facet_value(facet)) {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Case-insensitive substring match over one option list, order preserved
pub fn search<'a>(query: &str, options: &'a [String]) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .map(String::as_str)
        .filter(|option| option.to_lowercase().contains(&needle))
        .collect()
}
