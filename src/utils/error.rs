//! Error handling module
//!
//! Defines the application error taxonomy and its HTTP mapping.
//! Non-2xx *responses* from Trello are not errors here: they relay to the
//! caller with upstream's own status and body. Only local failures
//! (configuration, validation, transport) take this path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Credentials missing from the environment
    #[error("TRELLO_KEY or TRELLO_TOKEN not configured")]
    Config,

    /// Inbound request failed validation
    #[error("{0}")]
    Validation(String),

    /// Outbound call failed (network error or timeout)
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors render as `{"error": "..."}` with their mapped status code
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Request rejected: {} - Status code: {}", self, status);
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Validation("missing".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("oops".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            AppError::Config.to_string(),
            "TRELLO_KEY or TRELLO_TOKEN not configured"
        );
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = AppError::Validation("idList and name are required".to_string());
        assert_eq!(err.to_string(), "idList and name are required");
    }
}
