//! Dashboard Web Server
//!
//! Serves the dashboard page and its charts, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//! - `POST /select` - Select a record (form field `record`)
//! - `POST /fetch` - Fetch and process the selected record
//! - `POST /show` - Show `original` or `filtered` samples (form field `series`)
//!
//! ## Charts
//! - `GET /charts/signal.svg` - Line chart of the active series
//! - `GET /charts/zplane.svg` - Pole-zero plot
//!
//! ## JSON
//! - `GET /api/state` - Current view state
//! - `POST /api/fetch` - Fetch and return the resulting state
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - State change notifications

pub mod dto;
pub mod error;
pub mod live;
pub mod routes;
pub mod shell;
pub mod state;

pub use error::{WebError, WebResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/select", post(routes::dashboard::select))
        .route("/fetch", post(routes::dashboard::fetch))
        .route("/show", post(routes::dashboard::show));

    let chart_routes = Router::new()
        .route("/signal.svg", get(routes::charts::signal))
        .route("/zplane.svg", get(routes::charts::zplane));

    let api_routes = Router::new()
        .route("/state", get(routes::api::get_state))
        .route("/fetch", post(routes::api::fetch));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.server);
    let shared_state = Arc::new(state);

    page_routes
        .nest("/charts", chart_routes)
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .route("/ws", get(live::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Start the web server
pub async fn serve(state: AppState) -> Result<(), WebError> {
    let addr = state.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("CTG Monitor listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("CTG Monitor shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
