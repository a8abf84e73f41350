//! HTTP client service
//!
//! Encapsulates outbound communication with the Trello REST API. Every
//! call attaches the static key/token pair and runs under the configured
//! timeout; responses come back as a status code plus a tagged body so the
//! handlers can dispatch on JSON vs raw text explicitly.

use crate::config::{Credentials, TrelloConfig};
use crate::models::card::CardRequest;
use crate::utils::error::AppResult;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Upstream response body, classified once by the client
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Body that is not valid JSON, relayed as plain text
    Text(String),
}

/// Status and body of one upstream call
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: UpstreamBody,
}

/// Trello API client
#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    base_url: String,
}

impl TrelloClient {
    /// Create a new client instance
    pub fn new(config: &TrelloConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("trelloproxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a card via form-encoded POST
    pub async fn create_card(
        &self,
        credentials: &Credentials,
        card: &CardRequest,
    ) -> AppResult<UpstreamResponse> {
        debug!("Creating card in list {}", card.list_id);

        let url = format!("{}/cards", self.base_url);
        let form = build_card_form(credentials, card);

        let response = self.client.post(&url).form(&form).send().await?;

        relay(response).await
    }

    /// Fetch the lists of a board
    pub async fn board_lists(
        &self,
        credentials: &Credentials,
        board_id: &str,
    ) -> AppResult<UpstreamResponse> {
        debug!("Fetching lists for board {}", board_id);
        self.board_get(credentials, board_id, "lists").await
    }

    /// Fetch the members of a board
    pub async fn board_members(
        &self,
        credentials: &Credentials,
        board_id: &str,
    ) -> AppResult<UpstreamResponse> {
        debug!("Fetching members for board {}", board_id);
        self.board_get(credentials, board_id, "members").await
    }

    async fn board_get(
        &self,
        credentials: &Credentials,
        board_id: &str,
        resource: &str,
    ) -> AppResult<UpstreamResponse> {
        let url = format!("{}/boards/{}/{}", self.base_url, board_id, resource);

        let response = self
            .client
            .get(&url)
            .query(&[("key", &credentials.key), ("token", &credentials.token)])
            .send()
            .await?;

        relay(response).await
    }
}

/// Form fields Trello expects for card creation, credentials included.
/// `idMembers` is only present when member ids were given.
fn build_card_form(credentials: &Credentials, card: &CardRequest) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("key", credentials.key.clone()),
        ("token", credentials.token.clone()),
        ("idList", card.list_id.clone()),
        ("name", card.name.clone()),
        ("desc", card.desc.clone()),
    ];

    if let Some(id_members) = card.id_members() {
        form.push(("idMembers", id_members));
    }

    form
}

/// Read the response into a status plus tagged body
async fn relay(response: reqwest::Response) -> AppResult<UpstreamResponse> {
    let status = response.status().as_u16();
    let text = response.text().await?;

    let body = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => UpstreamBody::Json(value),
        Err(_) => UpstreamBody::Text(text),
    };

    debug!("Upstream responded with status {}", status);
    Ok(UpstreamResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrelloConfig;

    fn credentials() -> Credentials {
        Credentials {
            key: "test-key".to_string(),
            token: "test-token".to_string(),
        }
    }

    fn card(member_ids: Vec<&str>) -> CardRequest {
        CardRequest {
            list_id: "l1".to_string(),
            name: "Card".to_string(),
            desc: "Body".to_string(),
            member_ids: member_ids.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_client_creation() {
        let config = TrelloConfig {
            credentials: None,
            base_url: "https://api.trello.com/1/".to_string(),
            timeout: 15,
        };
        let client = TrelloClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.trello.com/1");
    }

    #[test]
    fn test_card_form_fields() {
        let form = build_card_form(&credentials(), &card(vec![]));

        assert_eq!(
            form,
            vec![
                ("key", "test-key".to_string()),
                ("token", "test-token".to_string()),
                ("idList", "l1".to_string()),
                ("name", "Card".to_string()),
                ("desc", "Body".to_string()),
            ]
        );
    }

    #[test]
    fn test_card_form_joins_member_ids() {
        let form = build_card_form(&credentials(), &card(vec!["m1", "m2"]));
        assert!(form.contains(&("idMembers", "m1,m2".to_string())));
    }

    #[test]
    fn test_card_form_omits_empty_members() {
        let form = build_card_form(&credentials(), &card(vec![]));
        assert!(!form.iter().any(|(name, _)| *name == "idMembers"));
    }
}
