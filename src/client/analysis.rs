//! Analysis Backend Client
//!
//! HTTP client for the signal-processing backend. The public operations never
//! fail: transport and server errors are logged and collapse into an empty
//! record list or `None`, which the dashboard turns into an inline message.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use super::types::{ProcessedSignal, RecordId};

/// Operations the dashboard needs from a backend
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Available record names; empty when the backend cannot be reached
    async fn list_records(&self) -> Vec<RecordId>;

    /// Process one record; `None` on any failure
    async fn process_signal(&self, record: &str) -> Option<ProcessedSignal>;
}

/// Configuration for the analysis client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl From<&crate::config::BackendConfig> for ClientConfig {
    fn from(config: &crate::config::BackendConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            request_timeout_ms: config.timeout_secs.max(1).saturating_mul(1000),
        }
    }
}

/// REST client for the analysis backend
pub struct AnalysisClient {
    client: Client,
    config: ClientConfig,
}

impl AnalysisClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// `GET /analysis/records`
    pub async fn try_list_records(&self) -> Result<Vec<RecordId>, ClientError> {
        let url = self.url("/analysis/records");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(ClientError::Decode)
    }

    /// `POST /analysis/process-signal?record_name=<record>`
    pub async fn try_process_signal(&self, record: &str) -> Result<ProcessedSignal, ClientError> {
        let url = format!(
            "{}?record_name={}",
            self.url("/analysis/process-signal"),
            urlencoding::encode(record)
        );

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response.json().await.map_err(ClientError::Decode)
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn list_records(&self) -> Vec<RecordId> {
        match self.try_list_records().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Fetched record list");
                records
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching available records");
                Vec::new()
            }
        }
    }

    async fn process_signal(&self, record: &str) -> Option<ProcessedSignal> {
        match self.try_process_signal(record).await {
            Ok(signal) => {
                tracing::debug!(
                    record = %record,
                    samples = signal.original_data.len(),
                    "Fetched processed signal"
                );
                Some(signal)
            }
            Err(e) => {
                tracing::error!(record = %record, error = %e, "Error fetching processed signal");
                None
            }
        }
    }
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(e)
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    ClientError::ApiError {
        status: status.as_u16(),
        message,
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the analysis backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Analysis backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::collections::HashMap;

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String, request_timeout_ms: u64) -> AnalysisClient {
        AnalysisClient::new(ClientConfig {
            base_url,
            request_timeout_ms,
        })
        .unwrap()
    }

    fn healthy_backend() -> Router {
        Router::new()
            .route(
                "/analysis/records",
                get(|| async { Json(vec!["1001".to_string(), "1002".to_string()]) }),
            )
            .route(
                "/analysis/process-signal",
                post(|Query(params): Query<HashMap<String, String>>| async move {
                    let record = params.get("record_name").cloned().unwrap_or_default();
                    if record == "missing" {
                        return Err((StatusCode::NOT_FOUND, "Record not found"));
                    }
                    Ok(Json(serde_json::json!({
                        "original_data": [140.0, 142.0, 141.0],
                        "filtered_data": [140.0, 141.0, 141.0],
                        "zeros": [{"re": -1.0, "im": 0.0}],
                        "poles": [{"re": 0.5, "im": 0.2}],
                        "message": format!("Successfully processed record {}.", record),
                    })))
                }),
            )
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_timeout_from_backend_config_is_never_zero() {
        let backend = crate::config::BackendConfig {
            base_url: "http://analysis:8000".to_string(),
            timeout_secs: 0,
        };
        assert_eq!(ClientConfig::from(&backend).request_timeout_ms, 1_000);

        let backend = crate::config::BackendConfig {
            timeout_secs: 3,
            ..backend
        };
        assert_eq!(ClientConfig::from(&backend).request_timeout_ms, 3_000);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client_for("http://localhost:8000/".to_string(), 1000);
        assert_eq!(
            client.url("/analysis/records"),
            "http://localhost:8000/analysis/records"
        );
    }

    #[tokio::test]
    async fn test_list_records() {
        let base = spawn_backend(healthy_backend()).await;
        let client = client_for(base, 2000);

        assert_eq!(client.list_records().await, vec!["1001", "1002"]);
    }

    #[tokio::test]
    async fn test_process_signal_sends_record_name() {
        let base = spawn_backend(healthy_backend()).await;
        let client = client_for(base, 2000);

        let signal = client.process_signal("1001 a&b").await.unwrap();
        assert_eq!(signal.original_data, vec![140.0, 142.0, 141.0]);
        assert_eq!(signal.poles.len(), 1);
        assert_eq!(
            signal.message.as_deref(),
            Some("Successfully processed record 1001 a&b.")
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_none() {
        let base = spawn_backend(healthy_backend()).await;
        let client = client_for(base, 2000);

        assert!(client.process_signal("missing").await.is_none());
        let err = client.try_process_signal("missing").await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_server_error_yields_empty_list() {
        let router = Router::new().route(
            "/analysis/records",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_backend(router).await;
        let client = client_for(base, 2000);

        assert!(client.list_records().await.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_body_is_none() {
        let router = Router::new().route(
            "/analysis/process-signal",
            post(|| async { "not json" }),
        );
        let base = spawn_backend(router).await;
        let client = client_for(base, 2000);

        let err = client.try_process_signal("1001").await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert!(client.process_signal("1001").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr), 2000);
        assert!(client.list_records().await.is_empty());
        assert!(client.process_signal("1001").await.is_none());
    }

    #[tokio::test]
    async fn test_timeout_is_none() {
        let router = Router::new().route(
            "/analysis/process-signal",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        );
        let base = spawn_backend(router).await;
        let client = client_for(base, 100);

        let err = client.try_process_signal("1001").await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout));
    }
}
