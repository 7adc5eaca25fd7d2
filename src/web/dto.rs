//! Data Transfer Objects
//!
//! Form bodies, query strings and JSON responses for the web endpoints.

use serde::{Deserialize, Serialize};

use crate::dashboard::FetchPhase;

/// Largest width or height a chart request may ask for
pub const MAX_CHART_DIMENSION: u32 = 4096;

/// `POST /select` form body
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub record: String,
}

/// `POST /show` form body
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    /// "original" or "filtered"
    pub series: String,
}

/// Optional size override for the chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ChartQuery {
    /// Resolve against defaults, rejecting zero or oversized dimensions
    pub fn resolve(&self, width: u32, height: u32) -> Result<(u32, u32), String> {
        let w = self.width.unwrap_or(width);
        let h = self.height.unwrap_or(height);
        for (name, value) in [("width", w), ("height", h)] {
            if value == 0 || value > MAX_CHART_DIMENSION {
                return Err(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_CHART_DIMENSION, value
                ));
            }
        }
        Ok((w, h))
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" when records are loaded, "degraded" otherwise
    pub status: String,
    /// Number of records the backend listed
    pub records: usize,
    pub phase: FetchPhase,
    pub revision: u64,
    pub uptime_seconds: u64,
    pub version: String,
}
