//! Repository for the `messages` table.

use sqlx::PgPool;
use webform_core::types::DbId;

use crate::models::chat::{ChatMessage, Message};

/// Provides operations on chat messages. Messages are insert-only.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a message, returning the created row.
    pub async fn create(
        pool: &PgPool,
        room_id: DbId,
        sender_id: DbId,
        content: &str,
    ) -> Result<Message, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (room_id, sender_id, content)
             VALUES ($1, $2, $3)
             RETURNING id, room_id, sender_id, content, created_at",
        )
        .bind(room_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Full history of a room, oldest first, with sender emails resolved
    /// in a single join.
    pub async fn list_by_room(
        pool: &PgPool,
        room_id: DbId,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        sqlx::query_as::<_, ChatMessage>(
            "SELECT m.id, m.room_id, m.sender_id,
                    u.email AS sender_email,
                    m.content, m.created_at
             FROM messages m
             JOIN users u ON u.id = m.sender_id
             WHERE m.room_id = $1
             ORDER BY m.created_at ASC, m.id ASC",
        )
        .bind(room_id)
        .fetch_all(pool)
        .await
    }
}
