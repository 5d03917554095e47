//! Selector lookups behind the two dropdowns.
//!
//! Both selectors are closed option lists, so a miss cannot come from the UI.
//! The miss paths still return a sentence instead of failing.

use crate::dataset::{Dataset, TournamentRecord};
use crate::error::DatasetError;
use crate::summary::WinSummary;

/// Win-count sentence for a country.
pub fn lookup_wins(summary: &WinSummary, country: &str) -> String {
    match summary.wins(country) {
        Some(wins) => format!("{} has won the World Cup {} time(s).", country, wins),
        None => format!("{} has never won the World Cup.", country),
    }
}

/// The final played in `year`.
pub fn find_final(dataset: &Dataset, year: u16) -> Result<&TournamentRecord, DatasetError> {
    dataset.get(year).ok_or_else(|| DatasetError::LookupMiss {
        table: "tournament",
        key: year.to_string(),
    })
}

/// Finalists sentence for a year.
pub fn lookup_final(dataset: &Dataset, year: u16) -> String {
    match find_final(dataset, year) {
        Ok(record) => format!(
            "In {}, {} won the World Cup and {} was the runner-up.",
            record.year, record.winner, record.runner_up
        ),
        Err(e) => {
            tracing::debug!("[LOOKUP] {}", e);
            format!("No World Cup final was played in {}.", year)
        }
    }
}
