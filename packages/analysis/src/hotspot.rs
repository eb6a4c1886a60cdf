//! Hotspot detection by grouping incidents on their location key.
//!
//! Counting is a single pass that records locations in first-seen order.
//! The ranking is a stable sort on descending count, so locations with
//! equal counts keep the order in which they first appeared in the input.

use std::collections::HashMap;

use crime_hotspots_incident_models::{Hotspot, Incident};

/// Number of hotspots shown in the sidebar.
pub const DEFAULT_HOTSPOT_LIMIT: usize = 3;

/// Counts incidents per location and ranks every location by count,
/// descending. Ties keep first-seen order.
#[must_use]
pub fn count_by_location(incidents: &[Incident]) -> Vec<Hotspot> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<Hotspot> = Vec::new();

    for incident in incidents {
        let location = incident.location.as_str();
        if let Some(&i) = index.get(location) {
            ranked[i].count += 1;
        } else {
            index.insert(location, ranked.len());
            ranked.push(Hotspot::new(location, 1));
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Returns the top `limit` locations by incident count.
#[must_use]
pub fn detect_hotspots(incidents: &[Incident], limit: usize) -> Vec<Hotspot> {
    let mut ranked = count_by_location(incidents);
    ranked.truncate(limit);

    log::debug!(
        "Detected {} hotspot(s) from {} incident(s)",
        ranked.len(),
        incidents.len()
    );

    ranked
}
