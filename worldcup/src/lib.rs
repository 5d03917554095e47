//! Historical FIFA World Cup finals.
//!
//! Shared data library for the dashboard: the baked-in finals table, name
//! normalization, per-country win aggregation, and the view models rendered
//! by the web UI (win-count text, finalist text, choropleth figure).

pub mod aliases;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod lookup;
pub mod regions;
pub mod summary;

pub use dataset::{Dataset, RawFinal, TournamentRecord};
pub use error::DatasetError;
pub use figure::ChoroplethFigure;
pub use lookup::{find_final, lookup_final, lookup_wins};
pub use summary::{CountryWinSummary, WinSummary};
