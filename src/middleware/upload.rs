use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::extension_for;

/// Multipart field carrying the photo file
pub const PHOTO_FIELD: &str = "photo";

/// Result of parsing a photo upload: the stored filename, if a file was sent.
///
/// A request without the `photo` field (or without a multipart body at
/// all) yields `None`; deciding that this is an error is up to the handler.
#[derive(Debug, Clone)]
pub struct PhotoUpload(pub Option<String>);

#[async_trait]
impl FromRequest<AppState> for PhotoUpload {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
            .unwrap_or(false);

        if !is_multipart {
            return Ok(PhotoUpload(None));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        while let Some(field) = multipart.next_field().await.map_err(from_multipart_error)? {
            if field.name() != Some(PHOTO_FIELD) {
                continue;
            }

            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let extension = extension_for(&content_type)?;

            let bytes = field.bytes().await.map_err(from_multipart_error)?;
            let filename = state.photos.put(extension, &bytes).await?;

            return Ok(PhotoUpload(Some(filename)));
        }

        Ok(PhotoUpload(None))
    }
}

fn from_multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large("Uploaded photo is too large")
    } else {
        ApiError::bad_request(err.body_text())
    }
}
