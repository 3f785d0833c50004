//! Route definitions for the `/upload` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /  -> upload (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::upload))
}
