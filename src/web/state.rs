//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ChartConfig, ServerConfig};
use crate::dashboard::Dashboard;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard being served
    pub dashboard: Arc<Dashboard>,
    /// Bind address and CORS origins
    pub server: Arc<ServerConfig>,
    /// Default chart sizes
    pub charts: ChartConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>, server: ServerConfig, charts: ChartConfig) -> Self {
        Self {
            dashboard,
            server: Arc::new(server),
            charts,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
