//! Trello Relay Proxy Server
//!
//! HTTP proxy that forwards card-creation and board read requests to the
//! Trello REST API, translating flexible JSON/form input into Trello's
//! form-encoded request shape

use anyhow::{Context, Result};
use tracing::{info, warn};

use trelloproxy::config::Settings;
use trelloproxy::handlers::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let settings = Settings::new().context("Failed to load server settings")?;
    info!("Server settings loaded");

    if settings.trello.credentials.is_none() {
        warn!("TRELLO_KEY or TRELLO_TOKEN not set; Trello routes will return 500 until configured");
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = create_router(settings)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Trello relay proxy started on {}", addr);
    info!("Card creation endpoint: http://{}/trello", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
