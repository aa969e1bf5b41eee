use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use super::{api, assets};
use crate::app::SharedState;
use crate::services::upload::MAX_UPLOAD_BYTES;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Site configuration ---
        .route(
            "/api/config",
            get(api::config::get_config).post(api::config::save_config),
        )
        // --- Contact inbox ---
        .route("/api/contact", post(api::contact::submit_contact))
        .route("/api/messages", get(api::contact::get_messages))
        // --- Uploads ---
        .merge(build_upload_routes())
        .route("/uploads/{name}", get(api::upload::serve_upload))
        // --- Pages ---
        .route("/", get(assets::landing_page))
        .route("/admin", get(assets::admin_page))
        .route("/static/{*path}", get(assets::static_handler))
        .fallback(assets::not_found_fallback)
        // --- Middleware ---
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn build_upload_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/upload", post(api::upload::upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::create_router;
    use crate::app::SharedState;
    use crate::server::api::test_state;
    use crate::services::upload::MAX_UPLOAD_BYTES;

    const BOUNDARY: &str = "router-test-boundary";

    async fn send(state: SharedState, req: Request<Body>) -> (StatusCode, Value) {
        let resp = create_router(state).oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn upload_request(payload_len: usize) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"big.png\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .into_bytes();
        body.resize(body.len() + payload_len, b'x');
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn upload_just_under_limit_is_accepted() {
        let state = test_state();
        let (status, body) = send(state.clone(), upload_request(MAX_UPLOAD_BYTES - 1024)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert!(body["url"].as_str().unwrap().starts_with("/uploads/"));

        let _ = std::fs::remove_dir_all(state.data_dir());
    }

    #[tokio::test]
    async fn upload_over_limit_is_413_json() {
        let state = test_state();
        let (status, body) = send(state.clone(), upload_request(MAX_UPLOAD_BYTES + 1024)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string());

        let _ = std::fs::remove_dir_all(state.data_dir());
    }

    #[tokio::test]
    async fn messages_with_unparsable_limit_lists_all() {
        let (status, body) = send(test_state(), get("/api/messages?limit=abc")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let (status, body) = send(test_state(), get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/api/nope");
    }

    #[tokio::test]
    async fn status_reports_ok() {
        let (status, body) = send(test_state(), get("/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
