//! JSON Routes
//!
//! - GET /api/state - Current view state
//! - POST /api/fetch - Run a fetch cycle and return the resulting state

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dashboard::{FetchOutcome, ViewState};
use crate::web::error::WebResult;
use crate::web::state::AppState;

/// GET /api/state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<ViewState> {
    Json(state.dashboard.snapshot().await)
}

/// POST /api/fetch
///
/// Waits for the backend. A failed fetch is not an HTTP error: the
/// returned state carries `phase: "error"` and the message.
pub async fn fetch(State(state): State<Arc<AppState>>) -> WebResult<Json<ViewState>> {
    let outcome = state.dashboard.fetch().await?;
    if outcome == FetchOutcome::Superseded {
        tracing::debug!("Fetch superseded by a newer request");
    }
    Ok(Json(state.dashboard.snapshot().await))
}
