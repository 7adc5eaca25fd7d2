//! Dashboard error types

use thiserror::Error;

/// Rejected user actions. None of these are fatal; the dashboard stays
/// usable after every one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Fetch requested without a selected record
    #[error("No record selected")]
    NoRecordSelected,

    /// Record name not in the backend-supplied list
    #[error("Unknown record: {0}")]
    UnknownRecord(String),

    /// Action not allowed while a fetch is in flight
    #[error("A fetch is already in progress")]
    Busy,

    /// Series toggle before any filtered data exists
    #[error("No processed data to display yet")]
    NoData,
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
