#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fetch cycles that drive the crime hotspot map view.
//!
//! [`MapLoader`] runs two independent cycles against a [`CrimeApi`]:
//!
//! - **Incidents**: fetch, apply the category filter, rank hotspots,
//!   render markers, hotspot list and statistics. A failure raises a
//!   blocking alert through the [`Notifier`] and leaves the view as it
//!   was.
//! - **Forecast**: show a loading row, fetch, render one row per entry.
//!   A failure shows an inline error row; no alert.
//!
//! [`MapLoader::reload`] runs both concurrently. Each cycle is tagged
//! with a [`RequestGeneration`]; a response that arrives after a newer
//! cycle of the same kind has started is dropped without rendering.

pub mod client;
pub mod generation;
pub mod notify;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crime_hotspots_analysis::{DEFAULT_HOTSPOT_LIMIT, detect_hotspots, filter_incidents};
use crime_hotspots_incident_models::{CategoryFilter, TimePeriod};
use crime_hotspots_view::{ViewContext, render};
use thiserror::Error;

pub use client::{CrimeApi, HttpCrimeApi};
pub use generation::RequestGeneration;
pub use notify::{LogNotifier, Notifier};

/// Alert shown when the incidents cycle fails.
pub const INCIDENTS_FAILED_MESSAGE: &str = "Failed to load crime data from the server. \
     Please ensure the backend is running and accessible.";

/// Errors from fetching API data.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Transport failure (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Current values of the page controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub category: CategoryFilter,
    pub period: TimePeriod,
}

/// How one fetch cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The response was rendered.
    Rendered,
    /// A newer cycle started first; the response was dropped.
    Superseded,
    /// The request failed and the user was told.
    Failed,
}

/// Outcomes of both cycles of a [`MapLoader::reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadOutcome {
    pub incidents: CycleOutcome,
    pub forecast: CycleOutcome,
}

/// Drives the view from the crime analytics API.
pub struct MapLoader {
    api: Arc<dyn CrimeApi>,
    notifier: Arc<dyn Notifier>,
    view: Mutex<ViewContext>,
    incidents_generation: RequestGeneration,
    forecast_generation: RequestGeneration,
}

impl MapLoader {
    #[must_use]
    pub fn new(api: Arc<dyn CrimeApi>, notifier: Arc<dyn Notifier>, view: ViewContext) -> Self {
        Self {
            api,
            notifier,
            view: Mutex::new(view),
            incidents_generation: RequestGeneration::default(),
            forecast_generation: RequestGeneration::default(),
        }
    }

    /// Locks the view for reading or presenting.
    ///
    /// Never hold the guard across an `.await`.
    pub fn view(&self) -> MutexGuard<'_, ViewContext> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the incidents and forecast cycles concurrently.
    pub async fn reload(&self, filters: &Filters) -> ReloadOutcome {
        if filters.period != TimePeriod::All {
            log::debug!(
                "Time period '{}' accepted but not applied: incidents carry no timestamp",
                filters.period
            );
        }

        let (incidents, forecast) = tokio::join!(
            self.load_incidents(&filters.category),
            self.load_forecast()
        );

        ReloadOutcome {
            incidents,
            forecast,
        }
    }

    /// Fetches incidents, filters them, ranks hotspots and renders the
    /// marker layer, hotspot list and statistics.
    pub async fn load_incidents(&self, category: &CategoryFilter) -> CycleOutcome {
        let generation = self.incidents_generation.begin();

        let incidents = match self.api.incidents().await {
            Ok(incidents) => incidents,
            Err(e) => {
                log::error!("Could not fetch crime data: {e}");
                if !self.incidents_generation.is_current(generation) {
                    return CycleOutcome::Superseded;
                }
                self.notifier.alert(INCIDENTS_FAILED_MESSAGE);
                return CycleOutcome::Failed;
            }
        };

        let incidents = filter_incidents(incidents, category);
        let hotspots = detect_hotspots(&incidents, DEFAULT_HOTSPOT_LIMIT);

        let mut view = self.view();
        if !self.incidents_generation.is_current(generation) {
            log::debug!("Dropping superseded incidents response (generation {generation})");
            return CycleOutcome::Superseded;
        }
        render::render_incidents(&mut view, &incidents, &hotspots);
        drop(view);

        log::info!(
            "Rendered {} incident(s), {} hotspot(s)",
            incidents.len(),
            hotspots.len()
        );
        CycleOutcome::Rendered
    }

    /// Fetches the forecast and renders the forecast panel.
    pub async fn load_forecast(&self) -> CycleOutcome {
        let generation = self.forecast_generation.begin();
        render::render_forecast_loading(&mut self.view());

        let result = self.api.forecast().await;

        let mut view = self.view();
        if !self.forecast_generation.is_current(generation) {
            log::debug!("Dropping superseded forecast response (generation {generation})");
            return CycleOutcome::Superseded;
        }
        match result {
            Ok(entries) => {
                render::render_forecast(&mut view, &entries);
                CycleOutcome::Rendered
            }
            Err(e) => {
                log::error!("Could not fetch forecast data: {e}");
                render::render_forecast_error(&mut view);
                CycleOutcome::Failed
            }
        }
    }
}
