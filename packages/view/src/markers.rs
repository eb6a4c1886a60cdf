//! The marker layer and its GeoJSON export.

use crime_hotspots_incident_models::Incident;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::icon::{IconResolver, MarkerStyle};

/// Popup content attached to a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub category: String,
    pub location: String,
    pub summary: String,
    pub severity: Option<f64>,
}

impl Popup {
    /// Popup body as escaped HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<strong>{}</strong><br>Location: {}<br>Summary: {}",
            escape_html(&self.category),
            escape_html(&self.location),
            escape_html(&self.summary),
        );
        if let Some(severity) = self.severity {
            html.push_str(&format!("<br>Severity: {severity:.2}"));
        }
        html
    }
}

/// A single styled marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub style: MarkerStyle,
    pub popup: Popup,
}

impl Marker {
    /// Builds the marker for an incident.
    #[must_use]
    pub fn for_incident(incident: &Incident, icons: &IconResolver) -> Self {
        Self {
            lat: incident.lat,
            lng: incident.lng,
            style: icons.resolve(&incident.crime_type),
            popup: Popup {
                category: incident.crime_type.clone(),
                location: incident.location.clone(),
                summary: incident.summary.clone(),
                severity: incident.severity,
            },
        }
    }

    fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("category".to_string(), json!(self.popup.category));
        properties.insert("location".to_string(), json!(self.popup.location));
        properties.insert("summary".to_string(), json!(self.popup.summary));
        properties.insert("severity".to_string(), json!(self.popup.severity));
        properties.insert("color".to_string(), json!(self.style.color.to_string()));
        properties.insert(
            "icon".to_string(),
            json!({
                "iconUrl": self.style.icon_url,
                "shadowUrl": self.style.shadow_url,
                "iconSize": self.style.icon_size,
                "iconAnchor": self.style.icon_anchor,
                "popupAnchor": self.style.popup_anchor,
                "shadowSize": self.style.shadow_size,
            }),
        );
        properties.insert("popup".to_string(), json!(self.popup.to_html()));

        Feature {
            bbox: None,
            // GeoJSON positions are [longitude, latitude].
            geometry: Some(Geometry::new(Value::Point(vec![self.lng, self.lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// The map's marker layer. Always replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    /// Removes every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Exports the layer as a GeoJSON `FeatureCollection` of points.
    #[must_use]
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.markers.iter().map(Marker::to_feature).collect(),
            foreign_members: None,
        }
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
