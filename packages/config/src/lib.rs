#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Layered configuration for the crime hotspot map.
//!
//! Resolution order, later layers winning:
//!
//! 1. `config/default.toml`, embedded at compile time.
//! 2. An optional user TOML file. Tables are merged key by key, so a user
//!    file only needs the keys it changes.
//! 3. The `CRIME_HOTSPOTS_API_URL` environment variable for the API base
//!    URL.
//!
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use crime_hotspots_incident_models::MarkerColor;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "CRIME_HOTSPOTS_API_URL";

const DEFAULT_TOML: &str = include_str!("../config/default.toml");

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The user config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A config layer is not valid TOML or does not match the schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Crime analytics API settings.
    pub api: ApiConfig,
    /// Initial map view and tile layer.
    pub map: MapConfig,
    /// Marker icon assets.
    pub markers: MarkersConfig,
}

/// Crime analytics API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL, e.g. `"http://127.0.0.1:8000"`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// URL of the incidents endpoint.
    #[must_use]
    pub fn incidents_url(&self) -> String {
        format!("{}/api/incidents", self.base_url.trim_end_matches('/'))
    }

    /// URL of the forecast endpoint.
    #[must_use]
    pub fn forecast_url(&self) -> String {
        format!("{}/api/forecast", self.base_url.trim_end_matches('/'))
    }
}

/// Initial map view and tile layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Latitude of the initial map center.
    pub center_lat: f64,
    /// Longitude of the initial map center.
    pub center_lng: f64,
    /// Initial zoom level.
    pub zoom: u8,
    /// Slippy-map tile URL template.
    pub tile_url: String,
    /// Tile attribution HTML.
    pub attribution: String,
}

/// Marker icon assets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkersConfig {
    /// Icon URL template; `{color}` is replaced by the marker color name.
    pub icon_url_template: String,
    /// Shadow image shared by every marker.
    pub shadow_url: String,
    /// Color for categories without a dedicated color.
    pub default_color: MarkerColor,
}

impl AppConfig {
    /// Loads the embedded defaults, merges `path` over them if given, and
    /// applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the user file cannot be read or either
    /// layer fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let user = match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Some(std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?)
            }
            None => None,
        };

        let mut config = Self::from_layers(user.as_deref())?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            log::debug!("{API_URL_ENV} overrides api.base_url");
            config.api.base_url = url;
        }

        Ok(config)
    }

    /// Builds a config from the embedded defaults and an optional user
    /// TOML document. No environment lookups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if either document is invalid.
    pub fn from_layers(user: Option<&str>) -> Result<Self, ConfigError> {
        let mut merged: toml::Table = toml::from_str(DEFAULT_TOML)?;
        if let Some(user) = user {
            let overrides: toml::Table = toml::from_str(user)?;
            merge_tables(&mut merged, overrides);
        }
        Ok(toml::Value::Table(merged).try_into()?)
    }
}

impl Default for AppConfig {
    /// The embedded defaults.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default TOML is malformed (a build-time
    /// guarantee since the file is embedded).
    fn default() -> Self {
        Self::from_layers(None)
            .unwrap_or_else(|e| panic!("Failed to parse embedded default config: {e}"))
    }
}

/// Recursively merges `overrides` into `base`. Nested tables merge key by
/// key; any other value replaces the base value.
fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
