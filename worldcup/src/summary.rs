//! Per-country win aggregation.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::regions::region_code;

/// One summary row: a country that has won at least one final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryWinSummary {
    pub country: String,
    pub wins: u32,
    /// None when the country has no map region; the map simply omits it.
    pub region_code: Option<&'static str>,
}

/// Win counts for every distinct winner, ordered alphabetically by country.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct WinSummary {
    rows: Vec<CountryWinSummary>,
}

impl WinSummary {
    /// Group the dataset by winner and join each row against the region table.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for record in dataset.records() {
            *counts.entry(record.winner.as_str()).or_default() += 1;
        }

        let rows = counts
            .into_iter()
            .map(|(country, wins)| {
                let region_code = region_code(country);
                if region_code.is_none() {
                    debug!("[SUMMARY] {} has no region code; omitted from map", country);
                }
                CountryWinSummary {
                    country: country.to_string(),
                    wins,
                    region_code,
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[CountryWinSummary] {
        &self.rows
    }

    /// Rows that can be placed on the map.
    pub fn mapped_rows(&self) -> impl Iterator<Item = (&CountryWinSummary, &'static str)> {
        self.rows
            .iter()
            .filter_map(|row| row.region_code.map(|code| (row, code)))
    }

    /// Win count for a canonical country name; None if it never won.
    pub fn wins(&self, country: &str) -> Option<u32> {
        self.rows
            .binary_search_by(|row| row.country.as_str().cmp(country))
            .ok()
            .map(|idx| self.rows[idx].wins)
    }

    /// Winner names, alphabetical.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.country.as_str())
    }

    pub fn total_wins(&self) -> u32 {
        self.rows.iter().map(|row| row.wins).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
