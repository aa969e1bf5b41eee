//! Site configuration API:
//!   GET  /api/config – effective configuration (defaults + stored)
//!   POST /api/config – replace configuration (merged over defaults)

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};

use crate::app::SharedState;

use super::{ApiResult, err_json, require_object};

/// GET /api/config
pub async fn get_config(State(state): State<SharedState>) -> ApiResult {
    let config = state
        .config_manager()
        .load()
        .map_err(|e| err_json(500, &format!("Failed to load config: {e}")))?;
    Ok(Json(Value::Object(config)))
}

/// POST /api/config
pub async fn save_config(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult {
    let partial = require_object(payload)?;
    state
        .config_manager()
        .save(&partial)
        .map_err(|e| err_json(500, &format!("Failed to save config: {e}")))?;
    tracing::info!(keys = partial.len(), "Site configuration saved");
    Ok(Json(json!({ "ok": true })))
}
