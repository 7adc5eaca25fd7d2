//! # CTG Monitor
//!
//! Dashboard for fetal heart-rate recordings processed by a remote analysis
//! backend: pick a record, fetch its original and filtered samples, and
//! inspect the filter's zeros and poles on the complex plane.
//!
//! ## Modules
//!
//! - [`client`]: HTTP client for the analysis backend
//! - [`dashboard`]: view state and the fetch cycle
//! - [`render`]: SVG line chart and pole-zero plot
//! - [`web`]: Axum server for the dashboard page
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ctg_monitor::client::{AnalysisClient, ClientConfig};
//! use ctg_monitor::dashboard::Dashboard;
//! use ctg_monitor::render::{LineChart, ZPlane};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(ClientConfig::default())?;
//!     let dashboard = Dashboard::new(Arc::new(client));
//!
//!     // Load record names and select the first one
//!     dashboard.mount().await;
//!
//!     // Fetch and process the selected record
//!     dashboard.fetch().await?;
//!
//!     let signal = dashboard.render_signal(&LineChart::default()).await;
//!     let plane = dashboard.render_plane(&ZPlane::default()).await;
//!     println!("{}\n{}", signal, plane);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod render;
pub mod web;

// Re-export top-level types for convenience
pub use client::{
    AnalysisApi, AnalysisClient, ClientConfig, ClientError, ComplexPoint, FilterCoefficients,
    ProcessedSignal, RecordId,
};

pub use dashboard::{
    Dashboard, DashboardError, DashboardEvent, DashboardResult, FetchOutcome, FetchPhase, Series,
    ViewState,
};

pub use render::{LineChart, Svg, ZPlane};

pub use web::{build_router, serve, AppState, WebError};

pub use config::{Config, ConfigError};
