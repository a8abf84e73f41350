//! Trello Relay Proxy Library
//!
//! Translates flexible JSON/form card requests into Trello's form-encoded
//! API shape and relays board read requests

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{Credentials, Settings};
pub use handlers::{create_router, AppState};
pub use models::card::CardRequest;
pub use models::member::BoardMember;
pub use services::{TrelloClient, UpstreamBody, UpstreamResponse};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
