//! Chat room and message models.

use serde::Serialize;
use sqlx::FromRow;
use webform_core::types::{DbId, Timestamp};

/// A conversation room, owned by exactly one client account.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Room plus owner details, for the admin room picker.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOverview {
    pub id: DbId,
    pub user_id: DbId,
    pub owner_email: String,
    pub owner_name: String,
    pub owner_business_name: Option<String>,
}

/// A persisted message row.
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: DbId,
    pub room_id: DbId,
    pub sender_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// Message joined with the sender's email, as shown in the chat view.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: DbId,
    pub room_id: DbId,
    pub sender_id: DbId,
    pub sender_email: String,
    pub content: String,
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Attach a sender email to a freshly inserted row. Used for live
    /// fan-out, where the sender's identity is already known from the
    /// connection and needs no extra lookup.
    pub fn from_row(message: Message, sender_email: String) -> Self {
        Self {
            id: message.id,
            room_id: message.room_id,
            sender_id: message.sender_id,
            sender_email,
            content: message.content,
            created_at: message.created_at,
        }
    }
}
