//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic and router construction

pub mod boards;
pub mod cards;
pub mod health;

use crate::config::{Credentials, Settings};
use crate::services::{TrelloClient, UpstreamBody, UpstreamResponse};
use crate::utils::error::{AppError, AppResult};
use anyhow::Result;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub trello: TrelloClient,
}

impl AppState {
    /// Credentials check shared by the Trello-calling routes.
    /// Fails before any outbound call when the key/token pair is unset.
    pub fn credentials(&self) -> AppResult<&Credentials> {
        self.settings
            .trello
            .credentials
            .as_ref()
            .ok_or(AppError::Config)
    }
}

/// Create application router
pub fn create_router(settings: Settings) -> Result<Router> {
    let trello = TrelloClient::new(&settings.trello)?;

    let app_state = Arc::new(AppState { settings, trello });

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let router = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/trello", post(cards::create_card))
        .route("/lists/:board_id", get(boards::board_lists))
        .route("/members/:board_id", get(boards::board_members))
        .with_state(app_state)
        .layer(middleware_stack)
        .layer(axum::middleware::from_fn(
            crate::middleware::logging::request_logging,
        ));

    Ok(router)
}

/// Mirror an upstream response verbatim: JSON stays JSON, anything else
/// relays as plain text, always with upstream's own status code.
pub(crate) fn relay_verbatim(upstream: UpstreamResponse) -> Response {
    let status = relay_status(upstream.status);
    match upstream.body {
        UpstreamBody::Json(value) => (status, Json(value)).into_response(),
        UpstreamBody::Text(text) => plain_text(status, text),
    }
}

/// Plain-text response with an explicit charset, used for non-JSON
/// upstream bodies
pub(crate) fn plain_text(status: StatusCode, text: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}

/// Upstream status codes pass through unchanged; a code outside the valid
/// range degrades to 502
pub(crate) fn relay_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}
