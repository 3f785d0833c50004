//! Handlers for the `/chat` resource (room provisioning and the admin picker).
//!
//! The WebSocket endpoint itself lives in [`crate::chat::handler`].

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use webform_core::types::DbId;
use webform_db::models::chat::RoomOverview;
use webform_db::repositories::room_repo::RoomRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for `POST /chat/init`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub ok: bool,
    pub room_id: DbId,
}

/// POST /api/v1/chat/init
///
/// Idempotently ensure a chat room exists for the caller and return its id.
/// The caller's identity comes from the verified access token.
pub async fn init(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<InitResponse>> {
    let room = RoomRepo::ensure_for_user(&state.pool, user.user_id).await?;
    Ok(Json(InitResponse {
        ok: true,
        room_id: room.id,
    }))
}

/// GET /api/v1/chat/rooms
///
/// Admin-only listing of every room with owner details, for the room picker.
pub async fn rooms(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
) -> AppResult<Json<Vec<RoomOverview>>> {
    let rooms = RoomRepo::list_with_owner(&state.pool).await?;
    Ok(Json(rooms))
}
