//! Embedded pages and static assets (server/web).

use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;
use serde_json::json;

#[derive(Embed)]
#[folder = "web/"]
struct SiteAssets;

/// GET /
pub async fn landing_page() -> Response {
    serve_embedded::<SiteAssets>("index.html")
}

/// GET /admin
pub async fn admin_page() -> Response {
    serve_embedded::<SiteAssets>("admin.html")
}

/// GET /static/{*path}
pub async fn static_handler(axum::extract::Path(path): axum::extract::Path<String>) -> Response {
    serve_embedded::<SiteAssets>(&format!("static/{path}"))
}

/// Fallback for unmatched paths. API-like paths get a JSON body.
pub async fn not_found_fallback(uri: Uri) -> Response {
    let request_path = uri.path();
    if is_json_path(request_path) {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "error": "Not Found",
                "path": request_path,
            })),
        )
            .into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}

fn is_json_path(path: &str) -> bool {
    const JSON_PREFIXES: [&str; 2] = ["/api", "/uploads"];

    JSON_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

fn serve_embedded<E: Embed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::{admin_page, is_json_path, landing_page, not_found_fallback, static_handler};
    use axum::body::to_bytes;
    use axum::extract::Path;
    use axum::http::{StatusCode, Uri, header};

    #[test]
    fn json_paths_match_by_root_segment() {
        for path in ["/api", "/api/nonexistent", "/uploads", "/uploads/x/y"] {
            assert!(is_json_path(path), "{path} should be JSON");
        }
        for path in ["/", "/apiary", "/uploadsx", "/admin/x"] {
            assert!(!is_json_path(path), "{path} should not be JSON");
        }
    }

    #[tokio::test]
    async fn pages_are_served_as_html() {
        for response in [landing_page().await, admin_page().await] {
            assert_eq!(response.status(), StatusCode::OK);
            let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
            assert!(content_type.to_str().unwrap().starts_with("text/html"));
        }
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let response = static_handler(Path("script.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let missing = static_handler(Path("nope.js".to_string())).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_fallback_returns_json_404() {
        let response = not_found_fallback(Uri::from_static("/api/nonexistent")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/api/nonexistent");
    }
}
