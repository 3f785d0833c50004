use std::sync::Arc;

use crate::chat::ChatHub;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: webform_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat connection manager (realtime fan-out per room).
    pub chat_hub: Arc<ChatHub>,
    /// Submission notification mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<webform_notify::BlueprintMailer>>,
}
