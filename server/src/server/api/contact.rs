//! Contact inbox API:
//!   POST /api/contact  – submit a message from the landing page form
//!   GET  /api/messages – newest messages first (max 100)

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use portfolio_db::MAX_RECENT_MESSAGES;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::app::SharedState;
use crate::services::contact::ContactError;

use super::{ApiResult, err_json, require_object};

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let body = require_object(payload)?;

    let result = state.contact_service().submit(
        &field_text(&body, "name"),
        &field_text(&body, "email"),
        &field_text(&body, "message"),
    );

    match result {
        Ok(_) => Ok(Json(json!({
            "ok": true,
            "message": "Message sent successfully.",
        }))),
        Err(e @ ContactError::Validation(_)) => Err(err_json(400, &e.to_string())),
        Err(e) => Err(err_json(500, &format!("Failed to store message: {e}"))),
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<usize>,
}

/// GET /api/messages
///
/// An unparsable query string falls back to the full listing.
pub async fn get_messages(
    State(state): State<SharedState>,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> ApiResult {
    let limit = match query {
        Ok(Query(q)) => q.limit.unwrap_or(MAX_RECENT_MESSAGES),
        Err(rejection) => {
            tracing::debug!("Ignoring messages query: {rejection}");
            MAX_RECENT_MESSAGES
        }
    };
    let messages = state
        .contact_service()
        .list_recent(limit)
        .map_err(|e| err_json(500, &format!("Failed to get messages: {e}")))?;
    Ok(Json(json!(messages)))
}

/// Text of a form field: strings as-is, missing or null as empty, other
/// values by their JSON text.
fn field_text(body: &Map<String, Value>, key: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
