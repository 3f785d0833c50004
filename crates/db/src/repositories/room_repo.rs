//! Repository for the `rooms` table.

use sqlx::PgPool;
use webform_core::types::DbId;

use crate::models::chat::{Room, RoomOverview};

const COLUMNS: &str = "id, user_id, created_at";

/// Provides operations on chat rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Ensure a room exists for the given account, creating it if absent.
    ///
    /// Idempotent: relies on the `uq_rooms_user` constraint, so
    /// concurrent callers converge on the same row.
    pub async fn ensure_for_user(pool: &PgPool, user_id: DbId) -> Result<Room, sqlx::Error> {
        sqlx::query("INSERT INTO rooms (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        Self::find_by_user(pool, user_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find the room owned by the given account.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE user_id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms with their owner's details, newest first.
    ///
    /// Backs the admin room picker.
    pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<RoomOverview>, sqlx::Error> {
        sqlx::query_as::<_, RoomOverview>(
            "SELECT r.id, r.user_id,
                    u.email AS owner_email,
                    u.name AS owner_name,
                    u.business_name AS owner_business_name
             FROM rooms r
             JOIN users u ON u.id = r.user_id
             ORDER BY r.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
