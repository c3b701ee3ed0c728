// handlers/planets/replace.rs - PUT /planets/:id

use axum::{extract::State, Extension, Json};

use crate::database::{Planet, PlanetInput};
use crate::error::{ApiError, ApiResult};
use crate::middleware::{PlanetId, Principal, ValidatedJson};
use crate::state::AppState;

/// PUT /planets/:id - full replace of the validated fields.
///
/// Every store failure is answered with 404, whatever its cause; the real
/// error only shows up in the log.
pub async fn replace(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    PlanetId(id): PlanetId,
    ValidatedJson(input): ValidatedJson<PlanetInput>,
) -> ApiResult<Json<Planet>> {
    let planet = state.store.update(id, input).await.map_err(|e| {
        tracing::warn!("Update of planet {} failed: {}", id, e);
        ApiError::not_found(format!("Cannot PUT /planets/{}", id))
    })?;

    tracing::info!("Planet {} replaced by '{}'", id, principal.subject);
    Ok(Json(planet))
}
