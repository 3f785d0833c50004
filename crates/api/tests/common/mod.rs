use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use webform_api::auth::jwt::JwtConfig;
use webform_api::chat::ChatHub;
use webform_api::config::ServerConfig;
use webform_api::router::build_app_router;
use webform_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The storage root points into the target directory so upload tests do
/// not litter the source tree.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        storage_root: std::env::temp_dir().join("webform-test-storage"),
        public_base_url: "http://localhost:3000".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The mailer is disabled: tests
/// never send email.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] but with a caller-supplied configuration,
/// for tests that need a specific storage root or JWT setup.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        chat_hub: Arc::new(ChatHub::new()),
        mailer: None,
    };
    build_app_router(state, &config)
}

/// Storage root used by [`test_config`], for tests that assert on stored files.
#[allow(dead_code)]
pub fn test_storage_root() -> PathBuf {
    std::env::temp_dir().join("webform-test-storage")
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a GET request with a Bearer token.
#[allow(dead_code)]
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<axum::body::Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a POST request with a JSON body.
#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a POST request with a JSON body and a Bearer token.
#[allow(dead_code)]
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<axum::body::Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body and parse it as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a status and return the parsed JSON body.
#[allow(dead_code)]
pub async fn assert_status_json(
    response: Response<axum::body::Body>,
    expected: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    body_json(response).await
}
