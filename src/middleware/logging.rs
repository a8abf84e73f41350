//! Logging middleware
//!
//! Records HTTP request and response information

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Request logging middleware
///
/// Assigns a request id and records method, path, status, and duration
/// for each HTTP request
pub async fn request_logging(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start_time.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            "{} {} -> {} in {:.2}ms",
            method,
            path,
            status,
            duration.as_secs_f64() * 1000.0
        );
    } else {
        info!(
            "{} {} -> {} in {:.2}ms",
            method,
            path,
            status,
            duration.as_secs_f64() * 1000.0
        );
    }

    response
}
