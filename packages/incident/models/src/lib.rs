#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident, forecast and hotspot types for the crime hotspot map.
//!
//! These types mirror the JSON contract of the crime analytics API
//! (`/api/incidents` and `/api/forecast`). Category labels stay plain
//! strings on the wire; [`CrimeType`] names the labels the map knows how
//! to style.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single recorded crime event as returned by `GET /api/incidents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Category label (e.g. `"Theft"`). Arbitrary strings are allowed.
    #[serde(rename = "type")]
    pub crime_type: String,
    /// District key used for hotspot grouping.
    pub location: String,
    /// Latitude (WGS84).
    pub lat: f64,
    /// Longitude (WGS84).
    pub lng: f64,
    /// Free-text incident summary.
    pub summary: String,
    /// Severity score in `[0, 1]` attached by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
}

/// Crime categories with a dedicated marker color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CrimeType {
    /// Unlawful taking of property.
    Theft,
    /// Physical attack on a person.
    Assault,
    /// Violence within a household.
    #[serde(rename = "Domestic Violence")]
    #[strum(serialize = "Domestic Violence")]
    DomesticViolence,
    /// Conflict over land ownership or use.
    #[serde(rename = "Land Dispute")]
    #[strum(serialize = "Land Dispute")]
    LandDispute,
    /// Willful destruction of property.
    Vandalism,
}

impl CrimeType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Theft,
            Self::Assault,
            Self::DomesticViolence,
            Self::LandDispute,
            Self::Vandalism,
        ]
    }
}

/// Marker pin colors available in the marker icon set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Orange,
    Red,
    Purple,
    Brown,
    #[serde(rename = "darkred")]
    #[strum(serialize = "darkred")]
    DarkRed,
    Green,
    Grey,
    Black,
    Gold,
    Violet,
    Yellow,
}

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// The user-selected category control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Keep every incident.
    #[default]
    All,
    /// Keep only incidents whose `type` equals this label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Returns `true` if the incident passes this filter.
    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => incident.crime_type == *label,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(label) => f.write_str(label),
        }
    }
}

impl From<CrimeType> for CategoryFilter {
    fn from(value: CrimeType) -> Self {
        Self::Only(value.to_string())
    }
}

/// The user-selected time-period control.
///
/// Incidents carry no timestamp, so the period is accepted and passed
/// through every reload but never narrows the result.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimePeriod {
    /// No time restriction.
    #[default]
    #[serde(rename = "all")]
    #[strum(serialize = "all")]
    All,
    /// The last 24 hours.
    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    LastDay,
    /// The last 7 days.
    #[serde(rename = "7d")]
    #[strum(serialize = "7d")]
    LastWeek,
    /// The last 30 days.
    #[serde(rename = "30d")]
    #[strum(serialize = "30d")]
    LastMonth,
}

impl TimePeriod {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::LastDay, Self::LastWeek, Self::LastMonth]
    }

    /// Human-readable label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::LastDay => "Last 24 hours",
            Self::LastWeek => "Last 7 days",
            Self::LastMonth => "Last 30 days",
        }
    }
}

/// A location ranked by incident count within the current filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hotspot {
    /// District key.
    pub location: String,
    /// Number of incidents at this location.
    pub count: usize,
}

impl Hotspot {
    /// Creates a hotspot entry.
    #[must_use]
    pub fn new(location: impl Into<String>, count: usize) -> Self {
        Self {
            location: location.into(),
            count,
        }
    }
}

impl std::fmt::Display for Hotspot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} incidents)", self.location, self.count)
    }
}

/// Classified forecast risk level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
pub enum RiskLevel {
    /// Risk score above 10.
    High,
    /// Risk score above 5.
    Medium,
    /// Everything else.
    Low,
    /// A label the client does not recognise.
    Unknown,
}

/// A predicted risk assessment for a location, from `GET /api/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// District key.
    pub location: String,
    /// Raw risk label; also used as the styling tag.
    pub risk_level: String,
    /// Human-readable explanation.
    pub reason: String,
    /// Combined count/severity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    /// Number of incidents the forecast was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_count: Option<u64>,
    /// Mean severity of those incidents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_severity: Option<f64>,
}

impl ForecastEntry {
    /// Classifies [`Self::risk_level`], falling back to
    /// [`RiskLevel::Unknown`].
    #[must_use]
    pub fn risk(&self) -> RiskLevel {
        self.risk_level.parse().unwrap_or(RiskLevel::Unknown)
    }
}
