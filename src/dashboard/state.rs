//! View State
//!
//! Everything the page needs to draw itself: the record list and
//! selection, where the current fetch stands, and the most recent fetch's
//! samples and filter coefficients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::client::{FilterCoefficients, RecordId};

/// Shown when a fetch is requested with no record selected
pub const NO_RECORD_MESSAGE: &str = "Please select a record from the dropdown.";

/// Shown when the backend does not deliver a processed signal
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch data. Is the backend server running correctly?";

/// Shown before the first fetch
pub const PLACEHOLDER_MESSAGE: &str = "Select a record and click the button to fetch data.";

/// Where the fetch cycle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Which sample sequence the line chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    Original,
    Filtered,
}

impl Series {
    pub fn as_str(&self) -> &'static str {
        match self {
            Series::Original => "original",
            Series::Filtered => "filtered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Series::Original => "Original",
            Series::Filtered => "Filtered",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Series {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" => Ok(Series::Original),
            "filtered" => Ok(Series::Filtered),
            other => Err(format!("unknown series '{}'", other)),
        }
    }
}

/// Snapshot of the dashboard
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    /// Record names supplied by the backend
    pub records: Vec<RecordId>,
    /// Currently selected record
    pub selected: Option<RecordId>,
    pub phase: FetchPhase,
    /// Inline error message, if any
    pub error: Option<String>,
    /// Samples as recorded
    pub original: Vec<f64>,
    /// Samples after filtering
    pub filtered: Vec<f64>,
    /// Sequence shown in the line chart
    pub active: Option<Series>,
    /// Zeros and poles of the filter used for the last fetch
    pub coefficients: FilterCoefficients,
    /// Backend status message of the last successful fetch
    pub message: Option<String>,
    /// Bumped on every state change
    pub revision: u64,
    /// Token of the in-flight fetch
    #[serde(skip)]
    pub(crate) pending: Option<Uuid>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn has_filtered(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// The sequence the line chart should draw (empty when none is active)
    pub fn active_data(&self) -> &[f64] {
        match self.active {
            Some(Series::Original) => &self.original,
            Some(Series::Filtered) => &self.filtered,
            None => &[],
        }
    }

    /// Whether the fetch control should be enabled
    pub fn can_fetch(&self) -> bool {
        !self.is_loading() && self.selected.is_some()
    }

    /// Text for the chart area when no chart is shown, or while loading
    pub fn status_line(&self) -> Option<String> {
        if self.is_loading() {
            let record = self.selected.as_deref().unwrap_or_default();
            return Some(format!("Loading data for {}...", record));
        }
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.active_data().is_empty() {
            return Some(PLACEHOLDER_MESSAGE.to_string());
        }
        None
    }
}
