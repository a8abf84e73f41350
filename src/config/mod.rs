//! Configuration management module
//!
//! Loads application configuration from environment variables at startup

pub mod settings;

pub use settings::{Credentials, ServerConfig, Settings, TrelloConfig};
