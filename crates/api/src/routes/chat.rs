//! Route definitions for the `/chat` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::chat::handler::ws_handler;
use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// POST /init   -> ensure room for caller (requires auth)
/// GET  /rooms  -> admin room picker (admin only)
/// GET  /ws     -> WebSocket upgrade (token in query string)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/init", post(chat::init))
        .route("/rooms", get(chat::rooms))
        .route("/ws", get(ws_handler))
}
