//! WebSocket upgrade handler and the chat frame protocol.
//!
//! Clients authenticate the upgrade request with `?token=<access token>`,
//! then speak a small JSON frame protocol:
//!
//! - client -> server: `{"type":"join","roomId":N}` and
//!   `{"type":"send","content":"..."}`
//! - server -> client: `joined`, `history`, `message`, and `error` frames.
//!
//! A connection must join a room before sending. Joining delivers the full
//! room history before any live messages, so a client never sees a live
//! message older than its history snapshot.

use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use webform_core::types::DbId;
use webform_db::models::chat::ChatMessage;
use webform_db::repositories::message_repo::MessageRepo;
use webform_db::repositories::room_repo::RoomRepo;
use webform_db::repositories::user_repo::UserRepo;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters accepted by the upgrade endpoint.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// Frames a client may send.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientFrame {
    #[serde(rename_all = "camelCase")]
    Join { room_id: DbId },
    Send { content: String },
}

/// Frames the server sends.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerFrame {
    #[serde(rename_all = "camelCase")]
    Joined { room_id: DbId },
    History { messages: Vec<ChatMessage> },
    Message { message: ChatMessage },
    Error { message: String },
}

impl ServerFrame {
    fn to_ws_message(&self) -> WsMessage {
        // Serialization of these frames cannot fail: all fields are plain
        // data with no custom Serialize impls.
        let json = serde_json::to_string(self).unwrap_or_default();
        WsMessage::Text(json.into())
    }
}

/// HTTP handler that authenticates and upgrades the connection.
///
/// The access token is carried in the query string because browsers cannot
/// set an `Authorization` header on a WebSocket handshake. Identity comes
/// exclusively from the verified token, never from client-supplied fields.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let claims = jwt::validate_token(&query.token, &state.config.jwt).map_err(|_| {
        AppError::Core(webform_core::error::CoreError::Unauthorized(
            "Invalid or expired token".to_string(),
        ))
    })?;

    // Resolve the sender email once; it is attached to every live message
    // this connection produces.
    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| {
            AppError::Core(webform_core::error::CoreError::Unauthorized(
                "Unknown user".to_string(),
            ))
        })?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user.id, user.email, claims.role)))
}

/// Manage a single chat connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with the hub.
///   2. Spawns a sender task that forwards messages from the hub channel.
///   3. Processes inbound frames on the current task.
///   4. Cleans up on disconnect.
async fn handle_socket(
    socket: WebSocket,
    state: AppState,
    user_id: DbId,
    user_email: String,
    role: String,
) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, user_id, "Chat connection established");

    let mut rx = state.chat_hub.add(conn_id.clone(), user_id).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: process inbound frames.
    while let Some(result) = stream.next().await {
        match result {
            Ok(WsMessage::Text(text)) => {
                let frame = match serde_json::from_str::<ClientFrame>(&text) {
                    Ok(frame) => frame,
                    Err(_) => {
                        send_error(&state, &conn_id, "Unrecognized frame").await;
                        continue;
                    }
                };
                match frame {
                    ClientFrame::Join { room_id } => {
                        handle_join(&state, &conn_id, user_id, &role, room_id).await;
                    }
                    ClientFrame::Send { content } => {
                        handle_send(&state, &conn_id, user_id, &user_email, &content).await;
                    }
                }
            }
            Ok(WsMessage::Close(_)) => break,
            Ok(WsMessage::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up: remove connection and abort sender task.
    state.chat_hub.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, user_id, "Chat connection closed");
}

/// Join a room: enforce access, switch membership, then replay history.
///
/// Clients may only join their own room; admins may join any room. The
/// `joined` acknowledgement always precedes the `history` frame.
async fn handle_join(state: &AppState, conn_id: &str, user_id: DbId, role: &str, room_id: DbId) {
    let room = match RoomRepo::find_by_id(&state.pool, room_id).await {
        Ok(Some(room)) => room,
        Ok(None) => {
            send_error(state, conn_id, "Room not found").await;
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, room_id, "Failed to look up room");
            send_error(state, conn_id, "Failed to join room").await;
            return;
        }
    };

    let is_admin = role == webform_core::roles::ROLE_ADMIN;
    if !is_admin && room.user_id != user_id {
        send_error(state, conn_id, "You do not have access to this room").await;
        return;
    }

    state.chat_hub.join_room(conn_id, room_id).await;
    state
        .chat_hub
        .send_to_connection(conn_id, ServerFrame::Joined { room_id }.to_ws_message())
        .await;

    match MessageRepo::list_by_room(&state.pool, room_id).await {
        Ok(messages) => {
            state
                .chat_hub
                .send_to_connection(conn_id, ServerFrame::History { messages }.to_ws_message())
                .await;
        }
        Err(e) => {
            tracing::error!(error = %e, room_id, "Failed to load room history");
            send_error(state, conn_id, "Failed to load message history").await;
        }
    }
}

/// Persist a message and fan it out to the room.
///
/// The text is trimmed first; an empty result is a silent no-op. The message
/// is durable before any connection sees it, and a failed insert produces an
/// `error` frame for the sender only.
async fn handle_send(
    state: &AppState,
    conn_id: &str,
    user_id: DbId,
    sender_email: &str,
    raw: &str,
) {
    let Some(room_id) = state.chat_hub.room_of(conn_id).await else {
        send_error(state, conn_id, "Join a room before sending").await;
        return;
    };

    let content = raw.trim();
    if content.is_empty() {
        return;
    }

    match MessageRepo::create(&state.pool, room_id, user_id, content).await {
        Ok(row) => {
            let message = ChatMessage::from_row(row, sender_email.to_string());
            let delivered = state
                .chat_hub
                .send_to_room(room_id, ServerFrame::Message { message }.to_ws_message())
                .await;
            tracing::debug!(room_id, delivered, "Chat message fanned out");
        }
        Err(e) => {
            tracing::error!(error = %e, room_id, "Failed to persist chat message");
            send_error(state, conn_id, "Failed to send message").await;
        }
    }
}

async fn send_error(state: &AppState, conn_id: &str, message: &str) {
    state
        .chat_hub
        .send_to_connection(
            conn_id,
            ServerFrame::Error {
                message: message.to_string(),
            }
            .to_ws_message(),
        )
        .await;
}
