//! Interactive filter menu.
//!
//! Each category or time-period change reloads both the incidents and
//! forecast panels, the same way the page controls do.

use std::path::{Path, PathBuf};

use crime_hotspots_incident_models::{ALL_CATEGORIES, CategoryFilter, CrimeType, TimePeriod};
use crime_hotspots_loader::{Filters, MapLoader};
use dialoguer::{Input, Select};

/// Menu actions.
enum Action {
    ChangeCategory,
    ChangePeriod,
    Reload,
    WriteHtml,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[
        Self::ChangeCategory,
        Self::ChangePeriod,
        Self::Reload,
        Self::WriteHtml,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeCategory => "Change crime type",
            Self::ChangePeriod => "Change time period",
            Self::Reload => "Reload",
            Self::WriteHtml => "Write HTML map",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the initial load, then loops on the menu until the user quits.
///
/// # Errors
///
/// Returns an error if a prompt fails or the HTML page cannot be written.
pub async fn run(
    loader: &MapLoader,
    mut filters: Filters,
    html: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crime Hotspot Map");
    println!();

    let mut html: Option<PathBuf> = html.map(Path::to_path_buf);

    loader.reload(&filters).await;
    super::present(loader, &filters, html.as_deref())?;

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        println!(
            "Showing crime type '{}', period '{}'",
            filters.category,
            filters.period.label()
        );

        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[idx] {
            Action::ChangeCategory => {
                let category = prompt_category(&filters.category)?;
                if category == filters.category {
                    continue;
                }
                filters.category = category;
            }
            Action::ChangePeriod => {
                let period = prompt_period(filters.period)?;
                if period == filters.period {
                    continue;
                }
                filters.period = period;
            }
            Action::Reload => {}
            Action::WriteHtml => {
                let default = html
                    .as_ref()
                    .map_or_else(|| "crime_map.html".to_string(), |p| p.display().to_string());
                let path: String = Input::new()
                    .with_prompt("Output path")
                    .default(default)
                    .interact_text()?;
                html = Some(PathBuf::from(path));
                super::present(loader, &filters, html.as_deref())?;
                continue;
            }
            Action::Quit => return Ok(()),
        }

        loader.reload(&filters).await;
        super::present(loader, &filters, html.as_deref())?;
    }
}

fn prompt_category(current: &CategoryFilter) -> Result<CategoryFilter, dialoguer::Error> {
    let options: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(CrimeType::all().iter().copied().map(CategoryFilter::from))
        .collect();
    let labels: Vec<String> = options
        .iter()
        .map(|option| match option {
            CategoryFilter::All => format!("{ALL_CATEGORIES} (every crime type)"),
            CategoryFilter::Only(label) => label.clone(),
        })
        .collect();
    let default = options.iter().position(|o| o == current).unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Crime type")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[idx].clone())
}

fn prompt_period(current: TimePeriod) -> Result<TimePeriod, dialoguer::Error> {
    let labels: Vec<&str> = TimePeriod::all().iter().map(|p| p.label()).collect();
    let default = TimePeriod::all()
        .iter()
        .position(|p| *p == current)
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Time period")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(TimePeriod::all()[idx])
}
