//! Board member projection
//!
//! Upstream member objects carry many fields; callers only get the four
//! below. Deserializing through this struct drops everything else and
//! fails hard when `id`, `username`, or `fullName` is absent, while
//! `initials` defaults to an empty string.

use serde::{Deserialize, Serialize};

/// Simplified Trello board member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: String,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub initials: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projection_keeps_four_fields() {
        let upstream = json!({
            "id": "1",
            "username": "a",
            "fullName": "A",
            "initials": "A",
            "avatarUrl": "https://example.invalid/a.png",
            "confirmed": true
        });

        let member: BoardMember = serde_json::from_value(upstream).unwrap();
        assert_eq!(
            serde_json::to_value(&member).unwrap(),
            json!({"id": "1", "username": "a", "fullName": "A", "initials": "A"})
        );
    }

    #[test]
    fn test_missing_initials_defaults_to_empty() {
        let member: BoardMember =
            serde_json::from_value(json!({"id": "1", "username": "a", "fullName": "A"})).unwrap();
        assert_eq!(member.initials, "");
    }

    #[test]
    fn test_missing_username_is_an_error() {
        let result: Result<BoardMember, _> =
            serde_json::from_value(json!({"id": "1", "fullName": "A", "initials": "A"}));
        assert!(result.is_err());
    }
}
