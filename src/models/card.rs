//! Card creation request model
//!
//! Resolves the flexible inbound payload into a validated card record.
//! Each logical field accepts several aliases; the first alias carrying a
//! non-empty value wins, in fixed priority order. Resolution is a pure
//! function over an already-decoded JSON object, independent of whether
//! the body arrived as JSON or form data.

use serde_json::{Map, Value};
use thiserror::Error;

/// Accepted aliases per logical field, in priority order
const LIST_ID_ALIASES: &[&str] = &["idList", "id_list", "list_id"];
const NAME_ALIASES: &[&str] = &["name", "title"];
const DESC_ALIASES: &[&str] = &["desc", "description", "body"];
const MEMBER_ALIASES: &[&str] = &["idMembers", "members", "assignees"];

/// Validation failure for a card creation payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardRequestError {
    #[error("idList and name are required. Example JSON: {{\"idList\":\"...\",\"name\":\"Title\",\"desc\":\"...\"}}")]
    MissingRequiredFields,
}

/// A validated, normalized card creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub list_id: String,
    pub name: String,
    pub desc: String,
    pub member_ids: Vec<String>,
}

impl CardRequest {
    /// Resolve a raw payload mapping into a validated card request.
    ///
    /// Fails when no alias for the list id or the name resolves to a
    /// non-empty string.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, CardRequestError> {
        let list_id = resolve_string(payload, LIST_ID_ALIASES);
        let name = resolve_string(payload, NAME_ALIASES);

        let (list_id, name) = match (list_id, name) {
            (Some(list_id), Some(name)) => (list_id, name),
            _ => return Err(CardRequestError::MissingRequiredFields),
        };

        Ok(Self {
            list_id,
            name,
            desc: resolve_string(payload, DESC_ALIASES).unwrap_or_default(),
            member_ids: resolve_members(payload),
        })
    }

    /// Upstream `idMembers` value: accepted ids joined with a comma.
    /// `None` when no member ids were given.
    pub fn id_members(&self) -> Option<String> {
        if self.member_ids.is_empty() {
            None
        } else {
            Some(self.member_ids.join(","))
        }
    }
}

/// First alias resolving to a non-empty string wins; an alias present with
/// an empty or non-string value does not stop the chain.
fn resolve_string(payload: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| payload.get(*key))
        .filter_map(|value| value.as_str())
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Member ids accept a single string or a sequence of strings
fn resolve_members(payload: &Map<String, Value>) -> Vec<String> {
    for key in MEMBER_ALIASES {
        match payload.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return vec![s.clone()],
            Some(Value::Array(items)) if !items.is_empty() => {
                let ids: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect();
                if !ids.is_empty() {
                    return ids;
                }
            }
            _ => {}
        }
    }
    Vec::new()
}
