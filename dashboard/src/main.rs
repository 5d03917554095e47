use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use dashboard::config::DashboardConfig;
use dashboard::server;
use dashboard::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load local .env if present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,dashboard=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DashboardConfig::from_env()?;

    // Malformed static data aborts here, before anything is served.
    let state = Arc::new(AppState::build().context("invalid World Cup dataset")?);
    server::log_startup(&state);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Dashboard listening on http://{}/", listener.local_addr()?);
    info!("Serving assets from {}", config.static_dir.display());

    server::serve(listener, state, config.static_dir).await
}
