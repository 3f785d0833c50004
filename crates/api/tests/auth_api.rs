//! HTTP-level integration tests for signup, login, and auth enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn signup_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "a-long-enough-password",
        "name": "Jamie Client",
        "businessName": "Acme Studio"
    })
}

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

/// Signup creates the account, provisions a chat room, and returns a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn signup_creates_account_and_room(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/auth/signup", signup_body("jamie@test.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    assert!(json["expiresIn"].is_number());
    assert_eq!(json["user"]["email"], "jamie@test.com");
    assert_eq!(json["user"]["role"], "client");
    assert_eq!(json["user"]["businessName"], "Acme Studio");

    // A room exists for the new account.
    let user_id = json["user"]["id"].as_i64().unwrap();
    let room_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(room_count, 1);
}

/// A duplicate email returns 409 Conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_returns_conflict(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", signup_body("dupe@test.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/signup", signup_body("dupe@test.com")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], "CONFLICT");
}

/// Malformed emails and short passwords are rejected before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn signup_validates_email_and_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut body = signup_body("not-an-email");
    let response = post_json(app, "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    body["email"] = serde_json::json!("ok@test.com");
    body["password"] = serde_json::json!("short");
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(user_count, 0);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Login with correct credentials returns a usable token.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", signup_body("login@test.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "login@test.com", "password": "a-long-enough-password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["accessToken"].as_str().unwrap().to_string();

    // The token authenticates a protected endpoint.
    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/chat/init",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Wrong password and unknown email both return 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_bad_credentials(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/signup", signup_body("secure@test.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "secure@test.com", "password": "wrong-password!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "nobody@test.com", "password": "whatever-here" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Protected endpoints reject missing and garbage tokens.
#[sqlx::test(migrations = "../db/migrations")]
async fn protected_routes_require_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json_auth(
        app,
        "/api/v1/chat/init",
        serde_json::json!({}),
        "not-a-real-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/chat/rooms", "also-not-real").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
