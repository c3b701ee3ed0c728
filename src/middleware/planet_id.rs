use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;

/// The `:id` path segment of a planet route.
///
/// Only all-digit segments that fit an `i32` count as a match. Anything
/// else is answered like an unmatched route (`Cannot <METHOD> <path>`),
/// never as a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetId(pub i32);

impl PlanetId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<i32>().ok().map(PlanetId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PlanetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .ok();

        raw.as_deref()
            .and_then(PlanetId::parse)
            .ok_or_else(|| ApiError::cannot(&parts.method, parts.uri.path()))
    }
}

/// Route layer that rejects non-numeric ids before any other stage runs
pub async fn match_planet_id(_id: PlanetId, request: Request, next: Next) -> Response {
    next.run(request).await
}
