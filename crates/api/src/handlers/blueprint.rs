//! Handlers for the `/blueprint` resource (submission intake).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use webform_core::blueprint::BlueprintDocument;
use webform_core::validation::validate_document;
use webform_db::repositories::blueprint_repo::BlueprintRepo;

use crate::error::AppResult;
use crate::response::{CountResponse, RejectionResponse, SubmitResponse};
use crate::state::AppState;

/// POST /api/v1/blueprint
///
/// Validate and persist a complete blueprint submission.
///
/// Validation failures return 400 with the full issue list; the document
/// is only stored when every rule passes. After a durable insert the
/// notification email is sent best-effort in a background task, so a mail
/// outage never fails a submission that is already stored.
pub async fn submit(
    State(state): State<AppState>,
    Json(doc): Json<BlueprintDocument>,
) -> AppResult<Response> {
    let issues = validate_document(&doc);
    if !issues.is_empty() {
        tracing::debug!(issue_count = issues.len(), "Blueprint rejected");
        return Ok((StatusCode::BAD_REQUEST, Json(RejectionResponse::new(issues))).into_response());
    }

    let id = BlueprintRepo::create(&state.pool, &doc).await?;
    tracing::info!(blueprint_id = id, "Blueprint stored");

    if let Some(mailer) = state.mailer.clone() {
        tokio::spawn(async move {
            if let Err(e) = mailer.deliver(id, &doc).await {
                tracing::warn!(blueprint_id = id, error = %e, "Notification email failed");
            }
        });
    }

    Ok(Json(SubmitResponse::new(id)).into_response())
}

/// GET /api/v1/blueprint
///
/// Total number of stored submissions.
pub async fn count(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let total = BlueprintRepo::count(&state.pool).await?;
    Ok(Json(CountResponse::new(total)))
}
