#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line client for the crime hotspot map.
//!
//! Loads incidents and the hotspot forecast from the crime analytics API,
//! prints the statistics, hotspot and forecast panels, and optionally
//! writes a standalone Leaflet page. With `--interactive` the category and
//! time-period controls can be changed from a menu; every change reloads
//! both panels.

mod interactive;
mod notify;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use console::Term;
use crime_hotspots_config::AppConfig;
use crime_hotspots_incident_models::{CategoryFilter, TimePeriod};
use crime_hotspots_loader::{CycleOutcome, Filters, HttpCrimeApi, MapLoader};
use crime_hotspots_view::html::{PageControls, render_page};
use crime_hotspots_view::{ViewContext, terminal};

use crate::notify::TerminalNotifier;

#[derive(Parser)]
#[command(name = "crime_hotspots", about = "Crime incident hotspot map client")]
struct Cli {
    /// TOML config file layered over the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base URL of the crime analytics API (overrides config and `CRIME_HOTSPOTS_API_URL`)
    #[arg(long)]
    api_url: Option<String>,
    /// Crime type to show (e.g. "Theft"), or "all"
    #[arg(long, default_value = "all")]
    category: CategoryFilter,
    /// Time period: all, 24h, 7d or 30d. Accepted but not yet applied
    #[arg(long, default_value = "all")]
    period: TimePeriod,
    /// Write a standalone HTML map to this path after every load
    #[arg(long)]
    html: Option<PathBuf>,
    /// Change the filters from a menu after the initial load
    #[arg(long, short)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    log::info!("Using crime analytics API at {}", config.api.base_url);

    let api = Arc::new(HttpCrimeApi::new(&config.api)?);
    let notifier = Arc::new(TerminalNotifier::new(cli.interactive, Term::stderr()));
    let loader = MapLoader::new(api, notifier, ViewContext::new(&config));

    let filters = Filters {
        category: cli.category,
        period: cli.period,
    };

    if cli.interactive {
        return interactive::run(&loader, filters, cli.html.as_deref()).await;
    }

    let outcome = loader.reload(&filters).await;
    present(&loader, &filters, cli.html.as_deref())?;

    if outcome.incidents == CycleOutcome::Failed {
        return Err("incident data could not be loaded".into());
    }
    Ok(())
}

/// Prints the terminal summary and, if requested, rewrites the HTML page.
fn present(loader: &MapLoader, filters: &Filters, html: Option<&Path>) -> std::io::Result<()> {
    let view = loader.view();
    println!("{}", terminal::render_summary(&view));

    if let Some(path) = html {
        let page = render_page(
            &view,
            PageControls {
                category: &filters.category,
                period: filters.period,
            },
        );
        drop(view);
        std::fs::write(path, page)?;
        log::info!("Wrote map to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filters_parse_from_flags() {
        let cli = Cli::try_parse_from([
            "crime_hotspots",
            "--category",
            "Land Dispute",
            "--period",
            "7d",
        ])
        .unwrap();

        assert_eq!(cli.category, CategoryFilter::Only("Land Dispute".to_string()));
        assert_eq!(cli.period, TimePeriod::LastWeek);
        assert!(!cli.interactive);
    }

    #[test]
    fn filters_default_to_everything() {
        let cli = Cli::try_parse_from(["crime_hotspots"]).unwrap();
        assert_eq!(cli.category, CategoryFilter::All);
        assert_eq!(cli.period, TimePeriod::All);
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!(Cli::try_parse_from(["crime_hotspots", "--period", "1y"]).is_err());
    }
}
