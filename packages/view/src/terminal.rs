//! Plain-terminal presentation of a [`ViewContext`].

use std::fmt::Display;

use console::style;
use crime_hotspots_incident_models::RiskLevel;

use crate::context::{ForecastRow, HotspotRow, ViewContext};

/// Renders the statistics, hotspot list, forecast and a marker summary.
#[must_use]
pub fn render_summary(view: &ViewContext) -> String {
    let mut out = String::new();

    push_line(&mut out, style("Statistics").bold().underlined());
    push_line(
        &mut out,
        format_args!(
            "  Total incidents: {}",
            style(view.statistics.total_incidents).bold()
        ),
    );
    push_line(
        &mut out,
        format_args!(
            "  Top hotspot:     {}",
            style(view.statistics.top_hotspot_text()).bold()
        ),
    );

    push_line(&mut out, "");
    push_line(&mut out, style("Hotspots").bold().underlined());
    for (rank, row) in view.hotspot_list.iter().enumerate() {
        match row {
            HotspotRow::Ranked(hotspot) => push_line(
                &mut out,
                format_args!(
                    "  {}. {:<24} {}",
                    rank + 1,
                    hotspot.location,
                    style(hotspot.count).cyan()
                ),
            ),
            HotspotRow::Placeholder => {
                push_line(&mut out, format_args!("  {}", style(row).dim()));
            }
        }
    }

    push_line(&mut out, "");
    push_line(&mut out, style("Forecast").bold().underlined());
    for row in &view.forecast {
        match row {
            ForecastRow::Entry(entry) => {
                let level = match entry.risk() {
                    RiskLevel::High => style(&entry.risk_level).red().bold(),
                    RiskLevel::Medium => style(&entry.risk_level).yellow().bold(),
                    RiskLevel::Low => style(&entry.risk_level).green().bold(),
                    RiskLevel::Unknown => style(&entry.risk_level).bold(),
                };
                push_line(
                    &mut out,
                    format_args!("  {} - Risk: {level}", entry.location),
                );
                push_line(&mut out, format_args!("    {}", style(&entry.reason).dim()));
            }
            ForecastRow::Error => push_line(
                &mut out,
                format_args!("  {}", style(row.message().unwrap_or_default()).red()),
            ),
            other => push_line(
                &mut out,
                format_args!("  {}", style(other.message().unwrap_or_default()).dim()),
            ),
        }
    }

    push_line(&mut out, "");
    push_line(
        &mut out,
        format_args!(
            "{} marker(s) on the map centred at ({:.4}, {:.4})",
            view.markers.len(),
            view.map.center_lat,
            view.map.center_lng
        ),
    );

    out
}

fn push_line(out: &mut String, line: impl Display) {
    out.push_str(&line.to_string());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use crime_hotspots_config::AppConfig;
    use crime_hotspots_incident_models::Hotspot;

    use super::*;
    use crate::render;

    #[test]
    fn summary_lists_regions() {
        console::set_colors_enabled(false);

        let mut view = ViewContext::new(&AppConfig::default());
        render::render_hotspot_list(&mut view, &[Hotspot::new("Guntur", 5)]);
        render::render_forecast(&mut view, &[]);

        let text = render_summary(&view);
        assert!(text.contains("Guntur"));
        assert!(text.contains("Could not generate forecast."));
        assert!(text.contains("0 marker(s)"));
    }

    #[test]
    fn every_region_ends_its_lines() {
        console::set_colors_enabled(false);

        let view = ViewContext::new(&AppConfig::default());
        let text = render_summary(&view);
        assert!(text.starts_with("Statistics\n"));
        assert!(text.ends_with(")\n"));
        assert!(text.contains("\n\nHotspots\n"));
        assert!(text.contains("\n\nForecast\n"));
    }

    #[test]
    fn empty_view_shows_placeholder_and_na() {
        console::set_colors_enabled(false);

        let mut view = ViewContext::new(&AppConfig::default());
        render::render_incidents(&mut view, &[], &[]);

        let text = render_summary(&view);
        assert!(text.contains("No hotspots detected for this filter."));
        assert!(text.contains("N/A"));
    }
}
