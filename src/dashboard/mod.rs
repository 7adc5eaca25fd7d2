//! Dashboard Orchestration
//!
//! The state machine behind the page: pick a record, fetch it through the
//! analysis backend, and hand the results to the renderers.
//!
//! ## Flow
//!
//! 1. [`Dashboard::mount`] loads the record list and selects the first entry
//! 2. [`Dashboard::fetch`] clears the previous result, enters `Loading`, and
//!    stores the processed signal (or an error message) when it returns
//! 3. [`Dashboard::show`] flips the line chart between original and
//!    filtered samples without another request
//!
//! Every transition bumps the state revision and is broadcast to
//! [`Dashboard::subscribe`] receivers so views can redraw.

mod controller;
mod error;
mod state;

pub use controller::{Dashboard, DashboardEvent, FetchOutcome, PendingFetch};
pub use error::{DashboardError, DashboardResult};
pub use state::{
    FetchPhase, Series, ViewState, FETCH_FAILED_MESSAGE, NO_RECORD_MESSAGE, PLACEHOLDER_MESSAGE,
};
