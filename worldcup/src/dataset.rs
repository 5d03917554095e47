//! The baked-in table of World Cup finals.

use serde::Serialize;

use crate::aliases::{canonical_name_with, check_aliases, COUNTRY_ALIASES};
use crate::error::DatasetError;

/// One final as written in the source table, before name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFinal {
    pub year: u16,
    pub winner: &'static str,
    pub runner_up: &'static str,
}

const fn final_(year: u16, winner: &'static str, runner_up: &'static str) -> RawFinal {
    RawFinal {
        year,
        winner,
        runner_up,
    }
}

/// Every men's World Cup final, 1930 through 2022.
pub const RAW_FINALS: &[RawFinal] = &[
    final_(1930, "Uruguay", "Argentina"),
    final_(1934, "Italy", "Czechoslovakia"),
    final_(1938, "Italy", "Hungary"),
    final_(1950, "Uruguay", "Brazil"),
    final_(1954, "West Germany", "Hungary"),
    final_(1958, "Brazil", "Sweden"),
    final_(1962, "Brazil", "Czechoslovakia"),
    final_(1966, "England", "West Germany"),
    final_(1970, "Brazil", "Italy"),
    final_(1974, "West Germany", "Netherlands"),
    final_(1978, "Argentina", "Netherlands"),
    final_(1982, "Italy", "West Germany"),
    final_(1986, "Argentina", "West Germany"),
    final_(1990, "West Germany", "Argentina"),
    final_(1994, "Brazil", "Italy"),
    final_(1998, "France", "Brazil"),
    final_(2002, "Brazil", "Germany"),
    final_(2006, "Italy", "France"),
    final_(2010, "Spain", "Netherlands"),
    final_(2014, "Germany", "Argentina"),
    final_(2018, "France", "Croatia"),
    final_(2022, "Argentina", "France"),
];

/// A normalized final: both names are canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
}

/// Immutable, year-ordered sequence of finals with unique years.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TournamentRecord>,
}

impl Dataset {
    /// Build from the baked-in [`RAW_FINALS`] table.
    pub fn load() -> Result<Self, DatasetError> {
        Self::from_raw(RAW_FINALS)
    }

    /// Normalize and validate raw rows using the built-in alias table.
    pub fn from_raw(rows: &[RawFinal]) -> Result<Self, DatasetError> {
        Self::from_raw_with(rows, COUNTRY_ALIASES)
    }

    /// Normalize and validate raw rows against an explicit alias table.
    pub fn from_raw_with(
        rows: &[RawFinal],
        aliases: &[(&'static str, &'static str)],
    ) -> Result<Self, DatasetError> {
        check_aliases(aliases)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let winner = canonical_name_with(aliases, row.winner);
            let runner_up = canonical_name_with(aliases, row.runner_up);

            if winner.is_empty() {
                return Err(DatasetError::BlankName {
                    year: row.year,
                    field: "winner",
                });
            }
            if runner_up.is_empty() {
                return Err(DatasetError::BlankName {
                    year: row.year,
                    field: "runner-up",
                });
            }
            if winner == runner_up {
                return Err(DatasetError::SameFinalists {
                    year: row.year,
                    country: winner.to_string(),
                });
            }

            records.push(TournamentRecord {
                year: row.year,
                winner: winner.to_string(),
                runner_up: runner_up.to_string(),
            });
        }

        records.sort_by_key(|r| r.year);
        if let Some(dup) = records.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(DatasetError::DuplicateYear(dup[0].year));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    /// Tournament years, ascending.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|r| r.year)
    }

    pub fn get(&self, year: u16) -> Option<&TournamentRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reference_table() {
        let dataset = Dataset::load().expect("reference data is valid");
        assert_eq!(dataset.len(), 22);
        assert_eq!(dataset.years().next(), Some(1930));
        assert_eq!(dataset.years().last(), Some(2022));
    }

    #[test]
    fn test_years_sorted_and_unique() {
        let dataset = Dataset::load().unwrap();
        let years: Vec<u16> = dataset.years().collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_aliases_applied_to_both_finalists() {
        let dataset = Dataset::load().unwrap();

        let y1954 = dataset.get(1954).unwrap();
        assert_eq!(y1954.winner, "Germany");

        let y1966 = dataset.get(1966).unwrap();
        assert_eq!(y1966.runner_up, "Germany");

        assert!(dataset
            .records()
            .iter()
            .all(|r| r.winner != "West Germany" && r.runner_up != "West Germany"));
    }

    #[test]
    fn test_unsorted_input_is_ordered() {
        let rows = [
            final_(2022, "Argentina", "France"),
            final_(1930, "Uruguay", "Argentina"),
        ];
        let dataset = Dataset::from_raw(&rows).unwrap();
        let years: Vec<u16> = dataset.years().collect();
        assert_eq!(years, vec![1930, 2022]);
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let rows = [
            final_(1930, "Uruguay", "Argentina"),
            final_(1934, "Italy", "Czechoslovakia"),
            final_(1930, "Argentina", "Uruguay"),
        ];
        let err = Dataset::from_raw(&rows).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateYear(1930));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_blank_name_rejected() {
        let rows = [final_(1930, "Uruguay", "   ")];
        let err = Dataset::from_raw(&rows).unwrap_err();
        assert_eq!(
            err,
            DatasetError::BlankName {
                year: 1930,
                field: "runner-up"
            }
        );
    }

    #[test]
    fn test_same_finalists_after_normalization_rejected() {
        let rows = [final_(1990, "West Germany", "Germany")];
        let err = Dataset::from_raw(&rows).unwrap_err();
        assert_eq!(
            err,
            DatasetError::SameFinalists {
                year: 1990,
                country: "Germany".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "tournament 1990: Germany listed as both winner and runner-up"
        );
    }

    #[test]
    fn test_non_canonical_alias_table_rejected() {
        let aliases: &[(&str, &str)] = &[("West Germany", "FRG"), ("FRG", "Germany")];
        let err = Dataset::from_raw_with(RAW_FINALS, aliases).unwrap_err();
        assert!(matches!(err, DatasetError::AliasNotCanonical { .. }));
    }

    #[test]
    fn test_get_unknown_year() {
        let dataset = Dataset::load().unwrap();
        assert!(dataset.get(1942).is_none());
        assert!(dataset.get(2026).is_none());
    }
}
