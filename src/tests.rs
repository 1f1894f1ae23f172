//! Scenarios crossing several modules: filter → paginate → chips.

use chrono::NaiveDate;

use crate::chips::{project, Palette};
use crate::filters::{count_active, set_date_range, toggle_facet_value};
use crate::models::{Activity, Facet, FilterState};
use crate::pagination::{paginate, total_pages, DEFAULT_PAGE_SIZE};
use crate::predicate::filter;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

fn history() -> Vec<Activity> {
    let assistants = ["J'Apprends", "Recherche", "Accueil"];
    let subjects = ["Maths", "Français", "Sciences"];
    let difficulties = ["Facile", "Moyen", "Difficile"];

    (0..18u32)
        .map(|i| {
            let mut activity = Activity::new(format!("act-{}", i), date(3, 1 + i))
                .with_subject(subjects[(i % 3) as usize]);
            if i % 5 != 0 {
                activity = activity.with_assistant(assistants[(i % 3) as usize]);
            }
            if i % 2 == 0 {
                activity = activity.with_difficulty(difficulties[(i / 2 % 3) as usize]);
            }
            activity
        })
        .collect()
}

#[test]
fn test_filtered_result_is_intersection_of_facet_filters() {
    let activities = history();
    let state = toggle_facet_value(&FilterState::default(), Facet::Subject, "Maths");
    let state = toggle_facet_value(&state, Facet::Subject, "Sciences");
    let state = toggle_facet_value(&state, Facet::Difficulty, "Facile");

    let combined: Vec<_> = filter(&activities, &state).iter().map(|a| a.id.clone()).collect();

    let subjects_only = FilterState {
        difficulties: Default::default(),
        ..state.clone()
    };
    let difficulties_only = FilterState {
        subjects: Default::default(),
        ..state.clone()
    };
    let by_subject = filter(&activities, &subjects_only);
    let by_difficulty = filter(&activities, &difficulties_only);
    let intersection: Vec<_> = by_subject
        .iter()
        .filter(|a| by_difficulty.iter().any(|b| b.id == a.id))
        .map(|a| a.id.clone())
        .collect();

    assert_eq!(combined, intersection);
    assert!(combined.len() < by_subject.len() + by_difficulty.len());
}

#[test]
fn test_filtered_pages_reconstruct_filtered_set() {
    let activities = history();
    let state = set_date_range(&set_date_range(&FilterState::default(), date(3, 15)), date(3, 3));
    let state = toggle_facet_value(&state, Facet::Assistant, "Autre");
    let state = toggle_facet_value(&state, Facet::Assistant, "Recherche");

    let matching = filter(&activities, &state);
    let pages = total_pages(matching.len(), DEFAULT_PAGE_SIZE);
    let rebuilt: Vec<_> = (1..=pages)
        .flat_map(|index| paginate(&matching, index, DEFAULT_PAGE_SIZE).items)
        .collect();

    assert!(!matching.is_empty());
    assert_eq!(rebuilt, matching);
    assert!(matching.iter().all(|a| a.date >= date(3, 3) && a.date <= date(3, 15)));
}

#[test]
fn test_narrowed_filter_leaves_stale_page_empty() {
    // paginate never clamps; callers that keep page 3 after narrowing see nothing
    let activities = history();
    let unfiltered = filter(&activities, &FilterState::default());
    assert_eq!(paginate(&unfiltered, 3, DEFAULT_PAGE_SIZE).items.len(), 4);

    let narrowed = toggle_facet_value(&FilterState::default(), Facet::Difficulty, "Difficile");
    let page = paginate(&filter(&activities, &narrowed), 3, DEFAULT_PAGE_SIZE);

    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_chips_track_state_through_removals() {
    let state = set_date_range(&FilterState::default(), date(3, 2));
    let state = toggle_facet_value(&state, Facet::Assistant, "Accueil");
    let state = toggle_facet_value(&state, Facet::Subject, "Sciences");

    let mut current = state;
    while count_active(&current) > 0 {
        let chips = project(&current, &Palette::default());
        assert_eq!(chips.len(), count_active(&current));

        let next = chips[chips.len() - 1].removal.apply(&current);
        assert_eq!(count_active(&next), count_active(&current) - 1);
        current = next;
    }

    assert_eq!(current, FilterState::default());
}

#[test]
fn test_deserialized_state_keeps_chip_round_trip() {
    let state: FilterState = serde_json::from_str(
        r#"{
            "date_range": {"start": null, "end": null},
            "assistants": ["Accueil", "Accueil"],
            "subjects": ["Maths"],
            "difficulties": []
        }"#,
    )
    .unwrap();

    let chips = project(&state, &Palette::default());
    assert_eq!(count_active(&state), 2);
    assert_eq!(chips.len(), 2);

    for chip in chips {
        assert_eq!(count_active(&chip.removal.apply(&state)), 1);
    }
}
