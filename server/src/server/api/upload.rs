//! Media upload API:
//!   POST /api/upload       – multipart field `file`, stored under a random name
//!   GET  /uploads/{name}   – serve a stored upload

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::Response;
use serde_json::json;

use crate::app::SharedState;
use crate::services::upload::UploadError;

use super::{ApiError, ApiResult, err_json};

/// POST /api/upload
pub async fn upload_file(State(state): State<SharedState>, mut multipart: Multipart) -> ApiResult {
    let svc = state.upload_service();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| err_json(e.status().as_u16(), &e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| err_json(e.status().as_u16(), &e.body_text()))?;

        let stored = svc.save(&filename, &data).map_err(upload_error)?;
        return Ok(Json(json!({ "ok": true, "url": stored.url })));
    }

    Err(upload_error(UploadError::MissingFile))
}

/// GET /uploads/{name}
pub async fn serve_upload(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let path = state.upload_service().resolve(&name).map_err(|e| match e {
        UploadError::InvalidName => err_json(404, &UploadError::NotFound.to_string()),
        other => upload_error(other),
    })?;
    let data = std::fs::read(&path).map_err(|e| err_json(500, &e.to_string()))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let resp = Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| err_json(500, &e.to_string()))?;
    Ok(resp)
}

fn upload_error(e: UploadError) -> ApiError {
    let status = match e {
        UploadError::MissingFile
        | UploadError::EmptyFilename
        | UploadError::UnsupportedType(_)
        | UploadError::InvalidName => 400,
        UploadError::NotFound => 404,
        UploadError::Io(_) => 500,
    };
    err_json(status, &e.to_string())
}
