//! CTG Monitor Server
//!
//! Serves the dashboard page against a running analysis backend.

use ctg_monitor::client::AnalysisClient;
use ctg_monitor::config::Config;
use ctg_monitor::dashboard::Dashboard;
use ctg_monitor::web::{serve, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    // Initialize logging
    ctg_monitor::logging::init(&config.logging);

    tracing::info!("CTG Monitor v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Analysis backend: {}", config.backend.base_url);

    let client = AnalysisClient::new((&config.backend).into())?;
    let dashboard = Arc::new(Dashboard::new(Arc::new(client)));

    let records = dashboard.mount().await;
    if records == 0 {
        tracing::warn!("No records available; is the analysis backend running?");
    }

    let state = AppState::new(dashboard, config.server, config.charts);
    serve(state).await?;

    Ok(())
}
