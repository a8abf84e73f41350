//! Card creation handler
//!
//! POST /trello
//!
//! Accepts the card payload as JSON or URL-form-encoded data, resolves the
//! field aliases into a validated request, and relays one form-encoded
//! POST to Trello's card endpoint. The upstream status code mirrors back
//! to the caller; a JSON upstream body is wrapped with a status field,
//! anything else relays as plain text.

use crate::handlers::{plain_text, relay_status, AppState};
use crate::models::card::CardRequest;
use crate::services::UpstreamBody;
use crate::utils::error::{AppError, AppResult};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Handle card creation requests
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    let credentials = state.credentials()?;

    let payload = decode_payload(&headers, &body)?;
    let card = CardRequest::from_payload(&payload)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    debug!("Relaying card creation for list {}", card.list_id);

    let upstream = state.trello.create_card(credentials, &card).await?;
    let status = relay_status(upstream.status);

    match upstream.body {
        UpstreamBody::Json(value) => {
            let wrapped = serde_json::json!({
                "status_code": upstream.status,
                "trello_response": value,
            });
            Ok((status, Json(wrapped)).into_response())
        }
        UpstreamBody::Text(text) => Ok(plain_text(status, text)),
    }
}

/// Decode the inbound body into a field mapping. JSON bodies must be
/// objects; everything else is treated as URL-form-encoded pairs, where
/// the first occurrence of a duplicated key wins.
fn decode_payload(headers: &HeaderMap, body: &[u8]) -> AppResult<Map<String, Value>> {
    if is_json(headers) {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            )),
        }
    } else {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::Validation(format!("Invalid form body: {}", e)))?;

        let mut map = Map::new();
        for (key, value) in pairs {
            map.entry(key).or_insert(Value::String(value));
        }
        Ok(map)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|content_type| content_type.contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_decode_json_object() {
        let payload =
            decode_payload(&json_headers(), br#"{"idList":"l1","name":"n"}"#).unwrap();
        assert_eq!(payload.get("idList"), Some(&Value::String("l1".to_string())));
    }

    #[test]
    fn test_decode_json_array_rejected() {
        let result = decode_payload(&json_headers(), b"[1,2]");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_decode_invalid_json_rejected() {
        let result = decode_payload(&json_headers(), b"{not json");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_decode_form_pairs() {
        let payload =
            decode_payload(&form_headers(), b"idList=l1&name=hello+world").unwrap();
        assert_eq!(payload.get("idList"), Some(&Value::String("l1".to_string())));
        assert_eq!(
            payload.get("name"),
            Some(&Value::String("hello world".to_string()))
        );
    }

    #[test]
    fn test_duplicate_form_key_first_wins() {
        let payload = decode_payload(&form_headers(), b"name=first&name=second").unwrap();
        assert_eq!(
            payload.get("name"),
            Some(&Value::String("first".to_string()))
        );
    }

    #[test]
    fn test_missing_content_type_falls_back_to_form() {
        let payload = decode_payload(&HeaderMap::new(), b"idList=l1").unwrap();
        assert_eq!(payload.get("idList"), Some(&Value::String("l1".to_string())));
    }
}
