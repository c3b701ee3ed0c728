// handlers/planets/create.rs - POST /planets

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::database::{Planet, PlanetInput};
use crate::error::ApiResult;
use crate::middleware::{Principal, ValidatedJson};
use crate::state::AppState;

/// POST /planets - persist a validated planet; the store assigns its id
pub async fn create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(input): ValidatedJson<PlanetInput>,
) -> ApiResult<(StatusCode, Json<Planet>)> {
    let planet = state.store.create(input).await?;

    tracing::info!("Planet {} created by '{}'", planet.id, principal.subject);
    Ok((StatusCode::CREATED, Json(planet)))
}
