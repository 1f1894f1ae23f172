use crate::models::{Activity, Facet, FilterState};


/// Whether a single activity passes every active filter of `state`
pub fn matches(activity: &Activity, state: &FilterState) -> bool {
    state.date_range.contains(activity.date)
        && Facet::ALL.iter().all(|facet| {
            let selection = state.selection(*facet);
            selection.is_empty()
                || activity
                    .facet_value(*facet)
                    .map_or(false, |value| selection.contains(value))
        })
}

/// Stable filter: keeps input order, AND across facets, OR within a facet
pub fn filter<'a>(activities: &'a [Activity], state: &FilterState) -> Vec<&'a Activity> {
    activities.iter().filter(|activity| matches(activity, state)).collect()
}
