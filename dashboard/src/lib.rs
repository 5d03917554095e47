//! FIFA World Cup winners dashboard.
//!
//! Serves one page with a choropleth map and two selectors. All data is
//! built once at startup into an immutable [`state::AppState`]; selector
//! changes arrive over a websocket (or plain HTTP) and are answered by the
//! pure functions in [`callbacks`].

pub mod callbacks;
pub mod config;
pub mod layout;
pub mod server;
pub mod state;
