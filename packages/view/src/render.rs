//! Region renderers.
//!
//! Each function clears its region and repopulates it from scratch.

use crime_hotspots_incident_models::{ForecastEntry, Hotspot, Incident};

use crate::context::{ForecastRow, HotspotRow, Statistics, ViewContext};
use crate::markers::Marker;

/// Refreshes the marker layer, hotspot list and statistics for a newly
/// fetched (and filtered) incident list.
pub fn render_incidents(view: &mut ViewContext, incidents: &[Incident], hotspots: &[Hotspot]) {
    render_markers(view, incidents);
    render_hotspot_list(view, hotspots);
    render_statistics(view, incidents, hotspots);
}

/// Replaces every marker with one marker per incident.
pub fn render_markers(view: &mut ViewContext, incidents: &[Incident]) {
    view.markers.clear();
    for incident in incidents {
        let marker = Marker::for_incident(incident, &view.icons);
        view.markers.add(marker);
    }
    log::debug!("Rendered {} marker(s)", view.markers.len());
}

/// Replaces the hotspot list; an empty ranking shows the placeholder row.
pub fn render_hotspot_list(view: &mut ViewContext, hotspots: &[Hotspot]) {
    view.hotspot_list = if hotspots.is_empty() {
        vec![HotspotRow::Placeholder]
    } else {
        hotspots.iter().cloned().map(HotspotRow::Ranked).collect()
    };
}

/// Replaces the statistics panel.
pub fn render_statistics(view: &mut ViewContext, incidents: &[Incident], hotspots: &[Hotspot]) {
    view.statistics = Statistics {
        total_incidents: incidents.len(),
        top_hotspot: hotspots.first().cloned(),
    };
}

/// Shows the loading row in the forecast panel.
pub fn render_forecast_loading(view: &mut ViewContext) {
    view.forecast = vec![ForecastRow::Loading];
}

/// Shows one row per forecast entry, or the "could not generate" row when
/// there are none.
pub fn render_forecast(view: &mut ViewContext, entries: &[ForecastEntry]) {
    view.forecast = if entries.is_empty() {
        vec![ForecastRow::Unavailable]
    } else {
        entries.iter().cloned().map(ForecastRow::Entry).collect()
    };
}

/// Shows the inline error row in the forecast panel.
pub fn render_forecast_error(view: &mut ViewContext) {
    view.forecast = vec![ForecastRow::Error];
}

#[cfg(test)]
mod tests {
    use crime_hotspots_config::AppConfig;
    use crime_hotspots_incident_models::MarkerColor;

    use super::*;

    fn incident(crime_type: &str, location: &str) -> Incident {
        Incident {
            crime_type: crime_type.to_string(),
            location: location.to_string(),
            lat: 15.9,
            lng: 79.7,
            summary: "summary".to_string(),
            severity: None,
        }
    }

    fn forecast(location: &str, risk_level: &str) -> ForecastEntry {
        ForecastEntry {
            location: location.to_string(),
            risk_level: risk_level.to_string(),
            reason: "Moderate incident volume (3).".to_string(),
            risk_score: None,
            incident_count: None,
            avg_severity: None,
        }
    }

    #[test]
    fn renders_two_location_scenario() {
        let mut view = ViewContext::new(&AppConfig::default());
        let incidents = vec![
            incident("Theft", "X"),
            incident("Theft", "X"),
            incident("Assault", "Y"),
        ];
        let hotspots = vec![Hotspot::new("X", 2), Hotspot::new("Y", 1)];

        render_incidents(&mut view, &incidents, &hotspots);

        assert_eq!(view.markers.len(), 3);
        assert_eq!(view.markers.markers()[2].style.color, MarkerColor::Red);
        assert_eq!(
            view.hotspot_list,
            vec![
                HotspotRow::Ranked(Hotspot::new("X", 2)),
                HotspotRow::Ranked(Hotspot::new("Y", 1)),
            ]
        );
        assert_eq!(view.statistics.total_incidents, 3);
        assert_eq!(view.statistics.top_hotspot_text(), "X (2 incidents)");
    }

    #[test]
    fn empty_list_shows_placeholder_and_na() {
        let mut view = ViewContext::new(&AppConfig::default());
        render_incidents(&mut view, &[incident("Theft", "X")], &[Hotspot::new("X", 1)]);

        render_incidents(&mut view, &[], &[]);

        assert!(view.markers.is_empty());
        assert_eq!(view.hotspot_list, vec![HotspotRow::Placeholder]);
        assert_eq!(view.statistics.total_incidents, 0);
        assert_eq!(view.statistics.top_hotspot_text(), "N/A");
    }

    #[test]
    fn rerender_replaces_instead_of_appending() {
        let mut view = ViewContext::new(&AppConfig::default());
        let first = vec![incident("Theft", "X"), incident("Theft", "Y")];
        render_incidents(&mut view, &first, &[Hotspot::new("X", 1), Hotspot::new("Y", 1)]);

        let second = vec![incident("Vandalism", "Z")];
        render_incidents(&mut view, &second, &[Hotspot::new("Z", 1)]);

        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers.markers()[0].popup.location, "Z");
        assert_eq!(view.hotspot_list.len(), 1);
    }

    #[test]
    fn forecast_states() {
        let mut view = ViewContext::new(&AppConfig::default());

        render_forecast_loading(&mut view);
        assert_eq!(view.forecast, vec![ForecastRow::Loading]);

        render_forecast(&mut view, &[]);
        assert_eq!(view.forecast, vec![ForecastRow::Unavailable]);

        let entries = vec![forecast("Guntur", "High"), forecast("Nellore", "Low")];
        render_forecast(&mut view, &entries);
        assert_eq!(view.forecast.len(), 2);
        assert!(matches!(&view.forecast[0], ForecastRow::Entry(e) if e.location == "Guntur"));

        render_forecast_error(&mut view);
        assert_eq!(view.forecast, vec![ForecastRow::Error]);
    }
}
