//! Board read handlers
//!
//! GET /lists/{board_id} relays Trello's board-lists response verbatim.
//! GET /members/{board_id} projects each member down to id, username,
//! fullName, and initials before responding.

use crate::handlers::{relay_status, relay_verbatim, AppState};
use crate::models::member::BoardMember;
use crate::services::{UpstreamBody, UpstreamResponse};
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Handle board list requests, pass-through
pub async fn board_lists(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<String>,
) -> AppResult<Response> {
    let credentials = state.credentials()?;
    let upstream = state.trello.board_lists(credentials, &board_id).await?;
    Ok(relay_verbatim(upstream))
}

/// Handle board member requests with field projection
pub async fn board_members(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<String>,
) -> AppResult<Response> {
    let credentials = state.credentials()?;
    let upstream = state.trello.board_members(credentials, &board_id).await?;

    let status = relay_status(upstream.status);

    // Only successful JSON responses are projected; error responses and
    // non-JSON bodies relay untouched. A member entry missing id,
    // username, or fullName is a hard failure (initials alone defaults).
    match upstream.body {
        UpstreamBody::Json(value) if status.is_success() => {
            let members: Vec<BoardMember> = serde_json::from_value(value)
                .map_err(|e| AppError::Internal(format!("Unexpected member payload: {}", e)))?;
            Ok((status, Json(members)).into_response())
        }
        body => Ok(relay_verbatim(UpstreamResponse {
            status: upstream.status,
            body,
        })),
    }
}
