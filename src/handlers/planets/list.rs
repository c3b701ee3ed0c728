// handlers/planets/list.rs - GET /planets

use axum::{extract::State, Json};

use crate::database::Planet;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /planets - every planet in insertion order
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Planet>>> {
    let planets = state.store.find_all().await?;
    Ok(Json(planets))
}
