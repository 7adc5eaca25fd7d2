//! Page Routes
//!
//! - GET / - The dashboard page
//! - POST /select - Change the selected record
//! - POST /fetch - Start a fetch for the selected record
//! - POST /show - Switch between original and filtered samples
//!
//! Form posts always redirect back to `/`. Rejected actions are logged and
//! whatever message the dashboard set is shown inline on the page.

use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use chrono::Datelike;
use std::sync::Arc;

use crate::dashboard::Series;
use crate::web::dto::{SelectForm, ShowForm};
use crate::web::shell;
use crate::web::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.dashboard.snapshot().await;
    let signal = state.charts.line_chart().render(snapshot.active_data());
    let plane = state.charts.zplane().render(&snapshot.coefficients);
    let year = chrono::Local::now().year();

    Html(shell::render_page(&snapshot, &signal, &plane, year))
}

/// POST /select
pub async fn select(State(state): State<Arc<AppState>>, Form(form): Form<SelectForm>) -> Redirect {
    if let Err(e) = state.dashboard.select_record(&form.record).await {
        tracing::warn!(record = %form.record, error = %e, "Selection rejected");
    }
    Redirect::to("/")
}

/// POST /fetch
///
/// Enters `Loading` before redirecting; the backend call finishes in the
/// background and live clients are told when it lands.
pub async fn fetch(State(state): State<Arc<AppState>>) -> Redirect {
    match state.dashboard.begin_fetch().await {
        Ok(pending) => {
            let dashboard = Arc::clone(&state.dashboard);
            tokio::spawn(async move {
                let record = pending.record().to_string();
                let outcome = dashboard.complete_fetch(pending).await;
                tracing::debug!(record = %record, outcome = ?outcome, "Background fetch finished");
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Fetch rejected");
        }
    }
    Redirect::to("/")
}

/// POST /show
pub async fn show(State(state): State<Arc<AppState>>, Form(form): Form<ShowForm>) -> Redirect {
    match form.series.parse::<Series>() {
        Ok(series) => {
            if let Err(e) = state.dashboard.show(series).await {
                tracing::warn!(series = %series, error = %e, "Toggle rejected");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid series");
        }
    }
    Redirect::to("/")
}
