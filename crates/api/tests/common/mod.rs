use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use makerfest_api::config::ServerConfig;
use makerfest_api::router::build_app_router;
use makerfest_api::state::AppState;
use makerfest_media::{MediaConfig, MediaUploader};
use makerfest_mirror::MirrorStore;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uploads land in a per-process temp directory so tests never touch the
/// working tree.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        uploads_dir: std::env::temp_dir().join(format!("makerfest-uploads-{}", std::process::id())),
        teacher_emails: vec!["head@school.edu".to_string()],
    }
}

/// Build the full application router with all middleware layers.
///
/// The mirror points at a port nothing listens on, so every mirror write
/// fails -- which the write path must tolerate by design. Tests that need
/// a live mirror use [`build_test_app_with_mirror`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_mirror(pool, "http://127.0.0.1:9".to_string())
}

/// Build the app with the mirror store pointed at `mirror_base_url`
/// (usually a wiremock server) and the image host likewise unreachable.
pub fn build_test_app_with_mirror(pool: PgPool, mirror_base_url: String) -> Router {
    build_test_app_full(pool, mirror_base_url, "http://127.0.0.1:9".to_string())
}

/// Build the app with explicit mirror and image-host endpoints.
pub fn build_test_app_full(pool: PgPool, mirror_base_url: String, media_base_url: String) -> Router {
    let config = test_config();

    let media_config = MediaConfig {
        cloud_name: "test-cloud".to_string(),
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
        base_url: media_base_url,
    };

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mirror: Arc::new(MirrorStore::new(mirror_base_url)),
        media: Arc::new(MediaUploader::new(media_config)),
    };

    build_app_router(state, &config)
}

/// Cookie header for a logged-in student.
pub fn student_cookies(email: &str) -> String {
    format!("user_email={email}; user_role=student")
}

/// Cookie header for a logged-in teacher.
pub fn teacher_cookies(email: &str) -> String {
    format!("user_email={email}; user_role=teacher")
}

/// Issue a GET request without cookies.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request with a session cookie header.
pub async fn get_with_cookies(app: Router, uri: &str, cookies: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("cookie", cookies)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a JSON POST request, optionally with a session cookie header.
pub async fn post_json(
    app: Router,
    uri: &str,
    cookies: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookies) = cookies {
        builder = builder.header("cookie", cookies);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Boundary used by [`multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "makerfest-test-boundary";

/// Build a multipart/form-data body from text fields.
pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));
    body
}

/// Issue a multipart POST of text fields with a session cookie header.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    cookies: &str,
    fields: &[(&str, &str)],
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("cookie", cookies)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields)))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
