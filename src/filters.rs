//! Pure mutators over [`FilterState`]. Each one borrows the current state and
//! returns the next one; none mutates its argument.

use chrono::NaiveDate;
use log::debug;

use crate::models::{DateRange, Facet, FilterState};


/// Two-phase date picker.
///
/// With no pending start, `clicked` becomes the start and the range awaits an
/// end. With a pending start, `clicked` becomes the end; a click earlier than
/// the start turns the first click into the end instead, so `start <= end`
/// always holds.
pub fn set_date_range(current: &FilterState, clicked: NaiveDate) -> FilterState {
    let date_range = match current.date_range {
        DateRange { start: Some(start), end: None } if clicked < start => {
            debug!("date range inverted, swapping {} and {}", start, clicked);
            DateRange { start: Some(clicked), end: Some(start) }
        }
        DateRange { start: Some(start), end: None } => DateRange {
            start: Some(start),
            end: Some(clicked),
        },
        _ => DateRange { start: Some(clicked), end: None },
    };

    FilterState {
        date_range,
        ..current.clone()
    }
}

pub fn clear_date_range(current: &FilterState) -> FilterState {
    FilterState {
        date_range: DateRange::default(),
        ..current.clone()
    }
}

/// Deselects `value` if selected, otherwise appends it to the facet's selection
pub fn toggle_facet_value(current: &FilterState, facet: Facet, value: &str) -> FilterState {
    let mut next = current.clone();
    *next.selection_mut(facet) = current.selection(facet).toggled(value);
    next
}

pub fn reset_all(_current: &FilterState) -> FilterState {
    FilterState::default()
}

/// Number of chips the state renders: one for any date bound, one per selected value
pub fn count_active(state: &FilterState) -> usize {
    usize::from(state.date_range.is_active())
        + Facet::ALL.iter().map(|facet| state.selection(*facet).len()).sum::<usize>()
}
