//! Client-side category filtering.

use crime_hotspots_incident_models::{CategoryFilter, Incident};

/// Keeps the incidents that pass `filter`. [`CategoryFilter::All`] returns
/// the input unchanged.
#[must_use]
pub fn filter_incidents(incidents: Vec<Incident>, filter: &CategoryFilter) -> Vec<Incident> {
    match filter {
        CategoryFilter::All => incidents,
        CategoryFilter::Only(_) => {
            let before = incidents.len();
            let kept: Vec<Incident> = incidents
                .into_iter()
                .filter(|incident| filter.matches(incident))
                .collect();
            log::debug!("Category filter '{filter}' kept {}/{before}", kept.len());
            kept
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(crime_type: &str, location: &str) -> Incident {
        Incident {
            crime_type: crime_type.to_string(),
            location: location.to_string(),
            lat: 16.5,
            lng: 80.6,
            summary: format!("{crime_type} at {location}"),
            severity: None,
        }
    }

    fn sample() -> Vec<Incident> {
        vec![
            incident("Theft", "X"),
            incident("Assault", "Y"),
            incident("Theft", "Z"),
            incident("theft", "X"),
        ]
    }

    #[test]
    fn all_is_identity() {
        let incidents = sample();
        assert_eq!(filter_incidents(incidents.clone(), &CategoryFilter::All), incidents);
    }

    #[test]
    fn specific_category_keeps_only_exact_matches() {
        let filter = CategoryFilter::Only("Theft".to_string());
        let kept = filter_incidents(sample(), &filter);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|i| i.crime_type == "Theft"));
    }

    #[test]
    fn unknown_category_yields_empty() {
        let filter = CategoryFilter::Only("Arson".to_string());
        assert!(filter_incidents(sample(), &filter).is_empty());
    }

    #[test]
    fn filtered_order_is_preserved() {
        let filter = CategoryFilter::Only("Theft".to_string());
        let locations: Vec<String> = filter_incidents(sample(), &filter)
            .into_iter()
            .map(|i| i.location)
            .collect();
        assert_eq!(locations, vec!["X", "Z"]);
    }
}
