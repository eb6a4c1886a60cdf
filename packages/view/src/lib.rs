#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View state and rendering for the crime hotspot map.
//!
//! [`ViewContext`] is the explicit replacement for the page's global map
//! and layer handles. It is owned by the application root and handed to
//! the render functions in [`render`], which fully replace one region per
//! call:
//!
//! - the marker layer (one styled marker per incident),
//! - the hotspot list,
//! - the statistics panel,
//! - the forecast panel.
//!
//! The context can then be presented as a terminal summary ([`terminal`])
//! or as a standalone Leaflet page ([`html`]) that keeps the element
//! identifiers in [`ids`].

pub mod context;
pub mod html;
pub mod icon;
pub mod markers;
pub mod render;
pub mod terminal;

pub use context::{ForecastRow, HotspotRow, Statistics, ViewContext};
pub use icon::{IconResolver, MarkerStyle};
pub use markers::{Marker, MarkerLayer, Popup};

/// Stable element identifiers shared by every UI binding.
pub mod ids {
    /// Map container.
    pub const MAP: &str = "map";
    /// Ranked hotspot list.
    pub const HOTSPOTS_LIST: &str = "hotspots-list";
    /// Total incident count field.
    pub const TOTAL_INCIDENTS: &str = "totalIncidents";
    /// Top hotspot field.
    pub const TOP_HOTSPOT: &str = "topHotspot";
    /// Forecast list.
    pub const FORECAST_LIST: &str = "forecast-list";
    /// Category selector.
    pub const CRIME_TYPE: &str = "crimeType";
    /// Time-period selector.
    pub const TIME_PERIOD: &str = "timePeriod";
}
