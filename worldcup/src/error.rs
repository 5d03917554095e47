//! Error types for dataset construction and lookups.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("duplicate tournament year {0}")]
    DuplicateYear(u16),

    #[error("tournament {year}: blank {field} name")]
    BlankName { year: u16, field: &'static str },

    #[error("tournament {year}: {country} listed as both winner and runner-up")]
    SameFinalists { year: u16, country: String },

    #[error("alias {alias:?} maps to {target:?}, which is not a canonical name")]
    AliasNotCanonical { alias: String, target: String },

    /// A selector value with no row in its backing table.
    #[error("no {table} entry for {key}")]
    LookupMiss { table: &'static str, key: String },
}

impl DatasetError {
    /// True for malformed static data, which must abort startup.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DatasetError::LookupMiss { .. })
    }
}
