use std::collections::HashMap;

use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use webform_core::types::{DbId, Timestamp};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type ChatSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single chat connection.
pub struct ChatConnection {
    /// Authenticated user ID. Connections are only registered after the
    /// access token has been validated.
    pub user_id: DbId,
    /// The room this connection is currently joined to, if any.
    /// A connection delivers messages only for its current room.
    pub room_id: Option<DbId>,
    /// Channel sender for outbound messages to this connection.
    pub sender: ChatSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Manages all active chat connections and their room membership.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct ChatHub {
    connections: RwLock<HashMap<String, ChatConnection>>,
}

impl ChatHub {
    /// Create a new, empty hub.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new authenticated connection.
    ///
    /// The connection starts without a room; it receives nothing until it
    /// joins one. Returns the receiver half of the message channel so the
    /// caller can forward messages to the WebSocket sink.
    pub async fn add(&self, conn_id: String, user_id: DbId) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = ChatConnection {
            user_id,
            room_id: None,
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Remove a connection by its ID.
    pub async fn remove(&self, conn_id: &str) {
        self.connections.write().await.remove(conn_id);
    }

    /// Move a connection into a room.
    ///
    /// Joining a new room replaces the previous membership, so a connection
    /// never receives messages for more than one room at a time.
    pub async fn join_room(&self, conn_id: &str, room_id: DbId) {
        if let Some(conn) = self.connections.write().await.get_mut(conn_id) {
            conn.room_id = Some(room_id);
        }
    }

    /// Report the room a connection is currently joined to.
    pub async fn room_of(&self, conn_id: &str) -> Option<DbId> {
        self.connections
            .read()
            .await
            .get(conn_id)
            .and_then(|conn| conn.room_id)
    }

    /// Send a message to every connection joined to the given room.
    ///
    /// Connections whose send channels are closed are silently skipped
    /// (they will be cleaned up on their next receive loop iteration).
    /// Returns the number of connections the message was sent to.
    pub async fn send_to_room(&self, room_id: DbId, message: Message) -> usize {
        let conns = self.connections.read().await;
        let mut count = 0;
        for conn in conns.values() {
            if conn.room_id == Some(room_id) {
                let _ = conn.sender.send(message.clone());
                count += 1;
            }
        }
        count
    }

    /// Send a message to a single connection by its ID.
    pub async fn send_to_connection(&self, conn_id: &str, message: Message) {
        if let Some(conn) = self.connections.read().await.get(conn_id) {
            let _ = conn.sender.send(message);
        }
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all chat connections");
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}
