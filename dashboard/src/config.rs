//! Dashboard configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Same port Dash apps listen on by default.
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub bind: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// Optional: `DASHBOARD_BIND` (full socket address), `DASHBOARD_PORT`
    /// (port on 127.0.0.1, ignored when `DASHBOARD_BIND` is set),
    /// `DASHBOARD_STATIC_DIR`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = match get("DASHBOARD_BIND").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .with_context(|| format!("DASHBOARD_BIND is not a socket address: {}", raw))?,
            None => {
                let port = match get("DASHBOARD_PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .with_context(|| format!("DASHBOARD_PORT is not a port: {}", raw))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([127, 0, 0, 1], port))
            }
        };

        let static_dir = get("DASHBOARD_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);

        Ok(Self { bind, static_dir })
    }
}

/// `static/` inside the dashboard crate (compile-time).
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
