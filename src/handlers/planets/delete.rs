// handlers/planets/delete.rs - DELETE /planets/:id

use axum::{extract::State, http::StatusCode, Extension};

use crate::error::{ApiError, ApiResult};
use crate::middleware::{PlanetId, Principal};
use crate::state::AppState;

/// DELETE /planets/:id - any store failure is reported as 404, like replace
pub async fn delete(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    PlanetId(id): PlanetId,
) -> ApiResult<StatusCode> {
    state.store.delete(id).await.map_err(|e| {
        tracing::warn!("Delete of planet {} failed: {}", id, e);
        ApiError::not_found(format!("Cannot DELETE /planets/{}", id))
    })?;

    tracing::info!("Planet {} deleted by '{}'", id, principal.subject);
    Ok(StatusCode::NO_CONTENT)
}
