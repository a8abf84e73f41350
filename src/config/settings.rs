//! Application configuration settings
//!
//! Defines all configuration structures and loading logic. Everything is
//! read once at startup; the resulting `Settings` value is immutable for
//! the process lifetime and passed into the router at construction.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Trello API configuration
    pub trello: TrelloConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Trello API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// Static key/token pair forwarded on every upstream call.
    /// `None` when the environment does not provide both; the Trello
    /// routes then answer with a configuration error per request.
    pub credentials: Option<Credentials>,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Trello key/token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let credentials = match (env::var("TRELLO_KEY"), env::var("TRELLO_TOKEN")) {
            (Ok(key), Ok(token)) if !key.is_empty() && !token.is_empty() => {
                Some(Credentials { key, token })
            }
            _ => None,
        };

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("PORT", "3000")
                    .parse()
                    .context("Invalid port number")?,
            },
            trello: TrelloConfig {
                credentials,
                base_url: get_env_or_default("TRELLO_BASE_URL", "https://api.trello.com/1"),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "15")
                    .parse()
                    .context("Invalid timeout value")?,
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.trello.base_url.starts_with("http") {
            anyhow::bail!("Invalid Trello base URL format, should start with 'http'");
        }

        if self.trello.timeout == 0 {
            anyhow::bail!("Request timeout cannot be 0");
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "localhost".to_string(),
                port: 3000,
            },
            trello: TrelloConfig {
                credentials: Some(Credentials {
                    key: "k".to_string(),
                    token: "t".to_string(),
                }),
                base_url: "https://api.trello.com/1".to_string(),
                timeout: 15,
            },
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(test_settings().validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut settings = test_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut settings = test_settings();
        settings.trello.base_url = "ftp://api.trello.com/1".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = test_settings();
        settings.trello.timeout = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_credentials_are_allowed() {
        let mut settings = test_settings();
        settings.trello.credentials = None;
        // Absent credentials are a per-request error, not a startup error
        assert!(settings.validate().is_ok());
    }
}
