//! Chart Routes
//!
//! - GET /charts/signal.svg - Line chart of the active series
//! - GET /charts/zplane.svg - Pole-zero plot of the current filter
//!
//! Both accept optional `width` and `height` query parameters and are
//! rendered from scratch on every request.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::render::{LineChart, Svg, ZPlane};
use crate::web::dto::ChartQuery;
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;

/// GET /charts/signal.svg
pub async fn signal(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> WebResult<Response> {
    let (width, height) = query
        .resolve(state.charts.signal_width, state.charts.signal_height)
        .map_err(WebError::Validation)?;

    let chart = LineChart::new(f64::from(width), f64::from(height));
    let svg = state.dashboard.render_signal(&chart).await;
    Ok(svg_response(svg))
}

/// GET /charts/zplane.svg
pub async fn zplane(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> WebResult<Response> {
    let size = state.charts.plane_size;
    let (width, height) = query.resolve(size, size).map_err(WebError::Validation)?;

    let plane = ZPlane::new(f64::from(width), f64::from(height));
    let svg = state.dashboard.render_plane(&plane).await;
    Ok(svg_response(svg))
}

fn svg_response(svg: Svg) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        svg.to_markup(),
    )
        .into_response()
}
