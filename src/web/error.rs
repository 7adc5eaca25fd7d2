//! Web Error Types
//!
//! Maps dashboard and server failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::dashboard::DashboardError;

#[derive(Error, Debug)]
pub enum WebError {
    /// Rejected dashboard action
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Bad query or form input
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl WebError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Dashboard(DashboardError::Busy) => (StatusCode::CONFLICT, "FETCH_IN_PROGRESS"),
            WebError::Dashboard(DashboardError::NoRecordSelected) => {
                (StatusCode::BAD_REQUEST, "NO_RECORD_SELECTED")
            }
            WebError::Dashboard(DashboardError::UnknownRecord(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_RECORD")
            }
            WebError::Dashboard(DashboardError::NoData) => (StatusCode::BAD_REQUEST, "NO_DATA"),
            WebError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request failed"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let busy = WebError::from(DashboardError::Busy);
        assert_eq!(busy.status_and_code().0, StatusCode::CONFLICT);
        assert_eq!(busy.to_string(), "A fetch is already in progress");

        let missing = WebError::from(DashboardError::NoRecordSelected);
        assert_eq!(missing.status_and_code(), (StatusCode::BAD_REQUEST, "NO_RECORD_SELECTED"));

        let internal = WebError::Internal("boom".to_string());
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
