pub mod auth;
pub mod blueprint;
pub mod chat;
pub mod health;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /blueprint          submit (POST), count (GET)
/// /upload             asset upload (POST, multipart)
///
/// /auth/signup        create account (public)
/// /auth/login         login (public)
///
/// /chat/init          ensure room for caller (requires auth)
/// /chat/rooms         admin room picker (admin only)
/// /chat/ws            WebSocket (token in query string)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blueprint", blueprint::router())
        .nest("/upload", upload::router())
        .nest("/auth", auth::router())
        .nest("/chat", chat::router())
}
