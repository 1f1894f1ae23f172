use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};

use crate::error::HistoryResult;
use crate::models::Activity;


/// Reads a JSON array of activities, keeping file order
pub fn load_activities(path: &Path) -> HistoryResult<Vec<Activity>> {
    let raw = std::fs::read_to_string(path)?;
    let activities: Vec<Activity> = serde_json::from_str(&raw)?;

    let mut seen = HashSet::new();
    for activity in &activities {
        if !seen.insert(activity.id.as_str()) {
            warn!("Duplicate activity id {} in {}", activity.id, path.display());
        }
    }

    info!("Loaded {} activities from {}", activities.len(), path.display());
    Ok(activities)
}
