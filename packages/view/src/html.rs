//! Standalone HTML page for a rendered [`ViewContext`].
//!
//! The page loads Leaflet and `Leaflet.markercluster` from a CDN, embeds
//! the marker layer as GeoJSON, and lays out the sidebar regions under the
//! identifiers in [`crate::ids`]. It is a snapshot: the selectors show the
//! active filter but changing them does not refetch.

use chrono::Utc;
use crime_hotspots_incident_models::{ALL_CATEGORIES, CategoryFilter, CrimeType, TimePeriod};

use crate::context::{ForecastRow, HotspotRow, ViewContext};
use crate::ids;
use crate::markers::escape_html;

const LEAFLET_VERSION: &str = "1.9.4";
const MARKERCLUSTER_VERSION: &str = "1.5.3";

/// Active control values shown in the page's selectors.
#[derive(Debug, Clone, Copy)]
pub struct PageControls<'a> {
    pub category: &'a CategoryFilter,
    pub period: TimePeriod,
}

/// Renders the full page.
#[must_use]
pub fn render_page(view: &ViewContext, controls: PageControls<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crime Hotspot Map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.css">
    <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@{cluster}/dist/MarkerCluster.css">
    <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@{cluster}/dist/MarkerCluster.Default.css">
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        <h1>Crime Hotspot Map</h1>
        {controls}
        <section>
            <h2>Statistics</h2>
            <p>Total incidents: <span id="{total_id}">{total}</span></p>
            <p>Top hotspot: <span id="{top_id}">{top}</span></p>
        </section>
        <section>
            <h2>Hotspots</h2>
            <ul id="{hotspots_id}">{hotspots}</ul>
        </section>
        <section>
            <h2>Forecast</h2>
            <ul id="{forecast_id}">{forecast}</ul>
        </section>
        <footer>Rendered {rendered_at}</footer>
    </aside>
    <div id="{map_id}"></div>
    <script src="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.js"></script>
    <script src="https://unpkg.com/leaflet.markercluster@{cluster}/dist/leaflet.markercluster.js"></script>
    <script>{js}</script>
</body>
</html>"#,
        leaflet = LEAFLET_VERSION,
        cluster = MARKERCLUSTER_VERSION,
        css = inline_css(),
        controls = render_controls(controls),
        total_id = ids::TOTAL_INCIDENTS,
        total = view.statistics.total_incidents,
        top_id = ids::TOP_HOTSPOT,
        top = escape_html(&view.statistics.top_hotspot_text()),
        hotspots_id = ids::HOTSPOTS_LIST,
        hotspots = render_hotspot_rows(&view.hotspot_list),
        forecast_id = ids::FORECAST_LIST,
        forecast = render_forecast_rows(&view.forecast),
        rendered_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        map_id = ids::MAP,
        js = inline_javascript(view),
    )
}

fn render_controls(controls: PageControls<'_>) -> String {
    let mut categories: Vec<String> = std::iter::once(ALL_CATEGORIES.to_string())
        .chain(CrimeType::all().iter().map(ToString::to_string))
        .collect();
    let selected_category = controls.category.to_string();
    if !categories.contains(&selected_category) {
        categories.push(selected_category.clone());
    }

    let category_options: String = categories
        .iter()
        .map(|value| option(value, value, *value == selected_category))
        .collect();
    let period_options: String = TimePeriod::all()
        .iter()
        .map(|p| option(p.as_ref(), p.label(), *p == controls.period))
        .collect();

    format!(
        r#"<section class="controls">
            <label>Crime type <select id="{category_id}">{category_options}</select></label>
            <label>Time period <select id="{period_id}">{period_options}</select></label>
        </section>"#,
        category_id = ids::CRIME_TYPE,
        period_id = ids::TIME_PERIOD,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label),
    )
}

fn render_hotspot_rows(rows: &[HotspotRow]) -> String {
    rows.iter()
        .map(|row| match row {
            HotspotRow::Ranked(hotspot) => format!(
                r#"<li>{} <span class="count">{}</span></li>"#,
                escape_html(&hotspot.location),
                hotspot.count
            ),
            HotspotRow::Placeholder => format!("<li>{}</li>", escape_html(&row.to_string())),
        })
        .collect()
}

fn render_forecast_rows(rows: &[ForecastRow]) -> String {
    rows.iter()
        .map(|row| match row {
            ForecastRow::Entry(entry) => format!(
                r#"<li data-risk="{risk}"><strong>{location} - Risk: {risk}</strong><p>{reason}</p></li>"#,
                risk = escape_html(&entry.risk_level),
                location = escape_html(&entry.location),
                reason = escape_html(&entry.reason),
            ),
            other => format!("<li>{}</li>", other.message().unwrap_or_default()),
        })
        .collect()
}

/// Serializes `value` as a JSON string literal that is safe inside a
/// `<script>` element.
fn js_string(value: &str) -> String {
    script_safe(&serde_json::Value::String(value.to_string()).to_string())
}

fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn inline_javascript(view: &ViewContext) -> String {
    let markers = script_safe(&view.markers.to_feature_collection().to_string());
    format!(
        r"
const map = L.map({map_id}).setView([{lat}, {lng}], {zoom});
L.tileLayer({tile_url}, {{ attribution: {attribution} }}).addTo(map);

const markersLayer = L.markerClusterGroup();
L.geoJSON({markers}, {{
    pointToLayer: (feature, latlng) =>
        L.marker(latlng, {{ icon: L.icon(feature.properties.icon) }})
            .bindPopup(feature.properties.popup),
}}).eachLayer((layer) => markersLayer.addLayer(layer));
map.addLayer(markersLayer);
",
        map_id = js_string(ids::MAP),
        lat = view.map.center_lat,
        lng = view.map.center_lng,
        zoom = view.map.zoom,
        tile_url = js_string(&view.map.tile_url),
        attribution = js_string(&view.map.attribution),
    )
}

const fn inline_css() -> &'static str {
    r#"
body { margin: 0; display: flex; height: 100vh; font-family: system-ui, sans-serif; }
.sidebar { width: 320px; overflow-y: auto; padding: 1rem; box-sizing: border-box; background: #f7f7f7; }
#map { flex: 1; }
ul { list-style: none; padding: 0; }
li { padding: 0.4rem 0; border-bottom: 1px solid #ddd; }
.count { float: right; font-weight: bold; }
li[data-risk="High"] { border-left: 4px solid #c62828; padding-left: 0.5rem; }
li[data-risk="Medium"] { border-left: 4px solid #ef6c00; padding-left: 0.5rem; }
li[data-risk="Low"] { border-left: 4px solid #2e7d32; padding-left: 0.5rem; }
label { display: block; margin-bottom: 0.5rem; }
footer { color: #888; font-size: 0.8rem; }
"#
}
