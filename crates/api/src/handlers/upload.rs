//! Handler for the `/upload` resource (logo and asset intake).

use axum::extract::{Multipart, State};
use axum::Json;
use webform_core::storage::unique_asset_filename;

use crate::error::{AppError, AppResult};
use crate::response::UploadResponse;
use crate::state::AppState;

/// POST /api/v1/upload
///
/// Accept a single multipart `file` field, store it under the configured
/// storage root with a collision-resistant generated name, and return the
/// public URL it will be served from.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().unwrap_or("upload").to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let filename = unique_asset_filename(&original);

        tokio::fs::create_dir_all(&state.config.storage_root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create storage dir: {e}")))?;

        let dest = state.config.storage_root.join(&filename);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        let url = state.config.asset_url(&filename);
        tracing::info!(%filename, size = data.len(), "Asset stored");

        return Ok(Json(UploadResponse::new(url, filename)));
    }

    Err(AppError::BadRequest(
        "No file received in multipart upload".to_string(),
    ))
}
