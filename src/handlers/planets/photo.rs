// handlers/planets/photo.rs - POST /planets/:id/photo

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::middleware::{PhotoUpload, PlanetId, Principal};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploaded {
    pub photo_filename: String,
}

/// POST /planets/:id/photo - record an uploaded photo against a planet.
///
/// The file is already in the blob store by the time this runs. If the
/// planet update then fails the file stays behind with nothing pointing
/// at it; there is no transaction spanning both stores.
pub async fn upload_photo(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    PlanetId(id): PlanetId,
    PhotoUpload(upload): PhotoUpload,
) -> ApiResult<(StatusCode, Json<PhotoUploaded>)> {
    let photo_filename = upload.ok_or_else(|| ApiError::bad_request("No photo uploaded"))?;

    state
        .store
        .set_photo(id, &photo_filename)
        .await
        .map_err(|e| {
            tracing::warn!(
                "Photo {} stored but planet {} update failed: {}",
                photo_filename,
                id,
                e
            );
            ApiError::not_found(format!("Cannot POST /planets/{}/photo", id))
        })?;

    tracing::info!(
        "Photo {} attached to planet {} by '{}'",
        photo_filename,
        id,
        principal.subject
    );
    Ok((StatusCode::CREATED, Json(PhotoUploaded { photo_filename })))
}
