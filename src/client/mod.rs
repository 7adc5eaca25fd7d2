//! Analysis Backend Integration
//!
//! The signal processing itself (filter design, filtering, pole/zero
//! extraction) runs in an external service. This module holds the types it
//! returns and the HTTP client that talks to it.
//!
//! ## Endpoints consumed
//!
//! - `GET /analysis/records` - list of record names
//! - `POST /analysis/process-signal?record_name=<id>` - original and filtered
//!   samples plus the filter's zeros and poles

mod analysis;
mod types;

pub use analysis::{AnalysisApi, AnalysisClient, ClientConfig, ClientError};
pub use types::{ComplexPoint, FilterCoefficients, ProcessedSignal, RecordId};
