//! Health check handlers
//!
//! Liveness string on the root path plus a JSON health report

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details
    pub details: HealthDetails,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Credential configuration state
    pub config: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Liveness string
///
/// GET /
pub async fn index() -> &'static str {
    "Trello Proxy alive. POST JSON to /trello to create card."
}

/// Basic health check
///
/// GET /health
/// Reports service status without calling Trello
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    let config = if state.settings.trello.credentials.is_some() {
        "configured".to_string()
    } else {
        "missing credentials".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: HealthDetails {
            config,
            uptime_seconds: get_uptime_seconds(),
        },
    })
}

/// Get service uptime in seconds
fn get_uptime_seconds() -> u64 {
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    static START_TIME: OnceLock<u64> = OnceLock::new();

    let start_time = *START_TIME.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let current_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    current_time.saturating_sub(start_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_liveness_string() {
        let body = index().await;
        assert_eq!(body, "Trello Proxy alive. POST JSON to /trello to create card.");
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let uptime1 = get_uptime_seconds();
        let uptime2 = get_uptime_seconds();
        assert!(uptime2 >= uptime1);
    }
}
