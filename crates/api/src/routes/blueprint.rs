//! Route definitions for the `/blueprint` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::blueprint;
use crate::state::AppState;

/// Routes mounted at `/blueprint`.
///
/// ```text
/// POST /  -> submit
/// GET  /  -> count
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(blueprint::submit).get(blueprint::count))
}
