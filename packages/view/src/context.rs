//! The view context and its four regions.

use crime_hotspots_config::{AppConfig, MapConfig};
use crime_hotspots_incident_models::{ForecastEntry, Hotspot};

use crate::icon::IconResolver;
use crate::markers::MarkerLayer;

/// Placeholder shown when the hotspot list is empty.
pub const NO_HOTSPOTS_MESSAGE: &str = "No hotspots detected for this filter.";
/// Top-hotspot text when there is none.
pub const NO_TOP_HOTSPOT: &str = "N/A";
/// Forecast row shown while the forecast is in flight.
pub const FORECAST_LOADING_MESSAGE: &str = "Generating forecast...";
/// Forecast row shown when the forecast came back empty.
pub const FORECAST_EMPTY_MESSAGE: &str = "Could not generate forecast.";
/// Forecast row shown when the forecast request failed.
pub const FORECAST_ERROR_MESSAGE: &str = "Error loading forecast.";

/// One row of the hotspot list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotspotRow {
    /// A ranked `(location, count)` pair.
    Ranked(Hotspot),
    /// Shown alone when there are no hotspots.
    Placeholder,
}

impl std::fmt::Display for HotspotRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ranked(hotspot) => write!(f, "{} {}", hotspot.location, hotspot.count),
            Self::Placeholder => f.write_str(NO_HOTSPOTS_MESSAGE),
        }
    }
}

/// Summary statistics panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_incidents: usize,
    pub top_hotspot: Option<Hotspot>,
}

impl Statistics {
    /// Text of the top-hotspot field, e.g. `"X (2 incidents)"` or `"N/A"`.
    #[must_use]
    pub fn top_hotspot_text(&self) -> String {
        self.top_hotspot
            .as_ref()
            .map_or_else(|| NO_TOP_HOTSPOT.to_string(), ToString::to_string)
    }
}

/// One row of the forecast panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastRow {
    /// The forecast request is in flight.
    Loading,
    /// A forecast entry, styled by its risk level.
    Entry(ForecastEntry),
    /// The forecast came back empty.
    Unavailable,
    /// The forecast request failed.
    Error,
}

impl ForecastRow {
    /// Message text for the non-entry rows.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(FORECAST_LOADING_MESSAGE),
            Self::Unavailable => Some(FORECAST_EMPTY_MESSAGE),
            Self::Error => Some(FORECAST_ERROR_MESSAGE),
            Self::Entry(_) => None,
        }
    }
}

/// All view state of the map page.
///
/// Owned by the application root and passed explicitly to the render
/// functions; nothing here is global.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub map: MapConfig,
    pub icons: IconResolver,
    pub markers: MarkerLayer,
    pub hotspot_list: Vec<HotspotRow>,
    pub statistics: Statistics,
    pub forecast: Vec<ForecastRow>,
}

impl ViewContext {
    /// Creates an empty view for the configured map.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            map: config.map.clone(),
            icons: IconResolver::new(&config.markers),
            markers: MarkerLayer::default(),
            hotspot_list: Vec::new(),
            statistics: Statistics::default(),
            forecast: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_hotspot_text_formats_or_falls_back() {
        let mut stats = Statistics::default();
        assert_eq!(stats.top_hotspot_text(), "N/A");

        stats.top_hotspot = Some(Hotspot::new("X", 2));
        assert_eq!(stats.top_hotspot_text(), "X (2 incidents)");
    }

    #[test]
    fn rows_render_as_text() {
        assert_eq!(
            HotspotRow::Ranked(Hotspot::new("Guntur", 4)).to_string(),
            "Guntur 4"
        );
        assert_eq!(HotspotRow::Placeholder.to_string(), NO_HOTSPOTS_MESSAGE);
        assert_eq!(ForecastRow::Error.message(), Some(FORECAST_ERROR_MESSAGE));
    }

    #[test]
    fn new_context_is_empty() {
        let view = ViewContext::new(&AppConfig::default());
        assert!(view.markers.is_empty());
        assert!(view.hotspot_list.is_empty());
        assert!(view.forecast.is_empty());
        assert_eq!(view.statistics, Statistics::default());
    }
}
