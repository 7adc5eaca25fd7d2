//! Dashboard Controller
//!
//! Owns the view state and drives the fetch cycle against an
//! [`AnalysisApi`]. State moves `Idle -> Loading -> Success | Error`, and a
//! new fetch from either end state goes back to `Loading`.
//!
//! Only one fetch runs at a time: starting another while `Loading` is
//! rejected with [`DashboardError::Busy`]. Each fetch also carries a token,
//! and a result whose token is not the in-flight one is dropped instead of
//! overwriting newer data.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use super::error::{DashboardError, DashboardResult};
use super::state::{FetchPhase, Series, ViewState, FETCH_FAILED_MESSAGE, NO_RECORD_MESSAGE};
use crate::client::{AnalysisApi, FilterCoefficients, ProcessedSignal, RecordId};
use crate::render::{LineChart, Svg, ZPlane};

/// Capacity of the change-notification channel
const EVENT_CAPACITY: usize = 64;

/// Change notification sent after every state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    StateChanged { revision: u64, phase: FetchPhase },
}

/// A fetch that has been started but not yet applied
#[derive(Debug)]
pub struct PendingFetch {
    token: Uuid,
    record: RecordId,
}

impl PendingFetch {
    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn token(&self) -> Uuid {
        self.token
    }
}

/// How a fetch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Data stored and displayed
    Completed,
    /// Backend failed; error message shown
    Failed,
    /// A newer fetch started first; the response was discarded
    Superseded,
}

/// The dashboard: view state plus the backend it fetches from
pub struct Dashboard {
    api: Arc<dyn AnalysisApi>,
    state: RwLock<ViewState>,
    events: broadcast::Sender<DashboardEvent>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            api,
            state: RwLock::new(ViewState::default()),
            events,
        }
    }

    /// Load the record list and select the first record.
    ///
    /// A failed request leaves an empty list; no error is surfaced. A
    /// previous selection is kept if it is still listed.
    pub async fn mount(&self) -> usize {
        let records = self.api.list_records().await;

        let mut state = self.state.write().await;
        let keep = state
            .selected
            .as_ref()
            .map(|s| records.contains(s))
            .unwrap_or(false);
        if !keep {
            state.selected = records.first().cloned();
        }
        state.records = records;

        let count = state.records.len();
        tracing::info!(count, selected = ?state.selected, "Record list loaded");
        self.publish(&mut state);
        count
    }

    /// Change the selected record
    pub async fn select_record(&self, record: &str) -> DashboardResult<()> {
        let mut state = self.state.write().await;

        if state.is_loading() {
            return Err(DashboardError::Busy);
        }
        if !state.records.iter().any(|r| r == record) {
            return Err(DashboardError::UnknownRecord(record.to_string()));
        }

        if state.selected.as_deref() != Some(record) {
            state.selected = Some(record.to_string());
            tracing::debug!(record = %record, "Record selected");
            self.publish(&mut state);
        }
        Ok(())
    }

    /// Validate, clear the previous result and enter `Loading`.
    ///
    /// With no record selected the validation message is set and the
    /// backend is never contacted. Rejected with `Busy` while another fetch
    /// is loading.
    pub async fn begin_fetch(&self) -> DashboardResult<PendingFetch> {
        let mut state = self.state.write().await;

        if state.is_loading() {
            tracing::debug!(pending = ?state.pending, "Fetch rejected, one is already loading");
            return Err(DashboardError::Busy);
        }

        let record = match state.selected.clone() {
            Some(record) => record,
            None => {
                state.error = Some(NO_RECORD_MESSAGE.to_string());
                self.publish(&mut state);
                return Err(DashboardError::NoRecordSelected);
            }
        };

        let token = Uuid::new_v4();
        state.original.clear();
        state.filtered.clear();
        state.coefficients = FilterCoefficients::default();
        state.active = None;
        state.error = None;
        state.message = None;
        state.phase = FetchPhase::Loading;
        state.pending = Some(token);

        tracing::info!(record = %record, token = %token, "Fetching processed signal");
        self.publish(&mut state);

        Ok(PendingFetch { token, record })
    }

    /// Issue the backend request for `pending` and apply the result
    pub async fn complete_fetch(&self, pending: PendingFetch) -> FetchOutcome {
        let response = self.api.process_signal(&pending.record).await;
        self.apply(pending, response).await
    }

    /// Run a full fetch cycle for the selected record
    pub async fn fetch(&self) -> DashboardResult<FetchOutcome> {
        let pending = self.begin_fetch().await?;
        Ok(self.complete_fetch(pending).await)
    }

    async fn apply(&self, pending: PendingFetch, response: Option<ProcessedSignal>) -> FetchOutcome {
        let mut state = self.state.write().await;

        if state.pending != Some(pending.token) {
            tracing::debug!(
                record = %pending.record,
                token = %pending.token,
                "Discarding stale fetch result"
            );
            return FetchOutcome::Superseded;
        }
        state.pending = None;

        let outcome = match response {
            Some(signal) => {
                let message = signal.message.clone();
                let (original, filtered, coefficients) = signal.into_parts();
                tracing::info!(
                    record = %pending.record,
                    samples = filtered.len(),
                    zeros = coefficients.zeros.len(),
                    poles = coefficients.poles.len(),
                    "Fetch completed"
                );
                state.original = original;
                state.filtered = filtered;
                state.coefficients = coefficients;
                state.message = message;
                state.active = Some(Series::Filtered);
                state.phase = FetchPhase::Success;
                FetchOutcome::Completed
            }
            None => {
                tracing::warn!(record = %pending.record, "Fetch failed");
                state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                state.phase = FetchPhase::Error;
                FetchOutcome::Failed
            }
        };

        self.publish(&mut state);
        outcome
    }

    /// Switch the line chart between original and filtered samples.
    ///
    /// Only allowed once filtered data exists. Leaves the coefficients alone.
    pub async fn show(&self, series: Series) -> DashboardResult<()> {
        let mut state = self.state.write().await;

        if !state.has_filtered() {
            return Err(DashboardError::NoData);
        }
        if state.active != Some(series) {
            state.active = Some(series);
            self.publish(&mut state);
        }
        Ok(())
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Current revision number
    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    /// Draw the active sample sequence
    pub async fn render_signal(&self, chart: &LineChart) -> Svg {
        let state = self.state.read().await;
        chart.render(state.active_data())
    }

    /// Draw the current filter's pole-zero plot
    pub async fn render_plane(&self, plane: &ZPlane) -> Svg {
        let state = self.state.read().await;
        plane.render(&state.coefficients)
    }

    /// Receive a notification after every state change
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    fn publish(&self, state: &mut ViewState) {
        state.revision += 1;
        // Nobody listening is fine
        let _ = self.events.send(DashboardEvent::StateChanged {
            revision: state.revision,
            phase: state.phase,
        });
    }
}
