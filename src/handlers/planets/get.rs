// handlers/planets/get.rs - GET /planets/:id

use axum::{extract::State, Json};

use crate::database::Planet;
use crate::error::{ApiError, ApiResult};
use crate::middleware::PlanetId;
use crate::state::AppState;

pub async fn get(
    State(state): State<AppState>,
    PlanetId(id): PlanetId,
) -> ApiResult<Json<Planet>> {
    state
        .store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Cannot GET /planets/{}", id)))
}
