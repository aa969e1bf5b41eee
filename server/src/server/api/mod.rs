//! JSON API handlers grouped by domain.

pub mod config;
pub mod contact;
pub mod upload;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::{Map, Value, json};

/// Error half of every handler result: a status code and `{"error": ...}`.
pub type ApiError = (StatusCode, Json<Value>);

pub type ApiResult<T = Json<Value>> = Result<T, ApiError>;

const INVALID_PAYLOAD: &str = "Invalid JSON payload.";

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> ApiError {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "error": message })),
    )
}

/// Accept only request bodies that parse as a JSON object.
pub fn require_object(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match payload {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(err_json(400, INVALID_PAYLOAD)),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {rejection}");
            Err(err_json(400, INVALID_PAYLOAD))
        }
    }
}

/// State over an in-memory database and a fresh temp data directory.
#[cfg(test)]
pub(crate) fn test_state() -> crate::app::SharedState {
    use crate::config::AppConfig;
    use crate::config::defaults::default_config;

    let db = portfolio_db::Database::open_in_memory().expect("Failed to create test DB");
    let data_dir = std::env::temp_dir().join(format!("portfolio-test-{}", uuid::Uuid::new_v4().simple()));
    let config = AppConfig {
        data_dir,
        ..AppConfig::default()
    };
    crate::app::SharedState::new(db, config, default_config())
}
