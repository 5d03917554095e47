//! Page structure: element ids, labels, dropdown options, initial outputs.

use serde::Serialize;
use worldcup::{lookup_final, lookup_wins, ChoroplethFigure, Dataset, WinSummary};

pub const PAGE_TITLE: &str = "FIFA World Cup Dashboard";
pub const PAGE_HEADING: &str = "FIFA World Cup Winners and Runner-Ups Dashboard";

// Stable element ids shared with static/dashboard.js.
pub const MAP_ID: &str = "choropleth-map";
pub const COUNTRY_DROPDOWN_ID: &str = "country-dropdown";
pub const WIN_COUNT_OUTPUT_ID: &str = "win-count-output";
pub const YEAR_DROPDOWN_ID: &str = "year-dropdown";
pub const FINAL_OUTPUT_ID: &str = "final-output";

pub const DEFAULT_COUNTRY: &str = "Brazil";
pub const DEFAULT_YEAR: u16 = 2022;

#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub title: &'static str,
    pub heading: &'static str,
    pub map: MapElement,
    pub country_dropdown: Dropdown<String>,
    pub win_count_output: OutputElement,
    pub year_dropdown: Dropdown<u16>,
    pub final_output: OutputElement,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapElement {
    pub id: &'static str,
    pub figure: ChoroplethFigure,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dropdown<T> {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<DropdownOption<T>>,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption<T> {
    pub label: String,
    pub value: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputElement {
    pub id: &'static str,
    pub children: String,
}

impl PageLayout {
    pub fn build(dataset: &Dataset, summary: &WinSummary, figure: &ChoroplethFigure) -> Self {
        let countries: Vec<String> = summary.countries().map(str::to_string).collect();
        let country = pick_default(&countries, DEFAULT_COUNTRY.to_string(), countries.first());

        let years: Vec<u16> = dataset.years().collect();
        let year = pick_default(&years, DEFAULT_YEAR, years.last());

        Self {
            title: PAGE_TITLE,
            heading: PAGE_HEADING,
            map: MapElement {
                id: MAP_ID,
                figure: figure.clone(),
            },
            win_count_output: OutputElement {
                id: WIN_COUNT_OUTPUT_ID,
                children: lookup_wins(summary, &country),
            },
            final_output: OutputElement {
                id: FINAL_OUTPUT_ID,
                children: lookup_final(dataset, year),
            },
            country_dropdown: Dropdown {
                id: COUNTRY_DROPDOWN_ID,
                label: "Select a Winner Country:",
                options: countries
                    .iter()
                    .map(|c| DropdownOption {
                        label: c.clone(),
                        value: c.clone(),
                    })
                    .collect(),
                value: country,
            },
            year_dropdown: Dropdown {
                id: YEAR_DROPDOWN_ID,
                label: "Select a World Cup Year:",
                options: years
                    .iter()
                    .map(|y| DropdownOption {
                        label: y.to_string(),
                        value: *y,
                    })
                    .collect(),
                value: year,
            },
        }
    }
}

/// The preferred default if it is one of the options, else the fallback.
fn pick_default<T: Clone + PartialEq>(options: &[T], preferred: T, fallback: Option<&T>) -> T {
    if options.contains(&preferred) {
        preferred
    } else {
        fallback.cloned().unwrap_or(preferred)
    }
}
