use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, Access, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Caller identity attached to the request once authorization passes
#[derive(Clone, Debug)]
pub struct Principal {
    pub subject: String,
    pub access: Access,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            access: claims.access,
        }
    }
}

/// Gate for mutating routes.
///
/// Missing or invalid credentials halt the chain with 401, a valid token
/// without write access halts it with 403. Stateless: nothing is stored
/// beyond the `Principal` inserted into this request's extensions.
pub async fn require_authorization(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(request.headers()).map_err(|msg| {
        tracing::warn!(
            "Authorization rejected for {} {}: {}",
            request.method(),
            request.uri().path(),
            msg
        );
        ApiError::unauthorized(msg)
    })?;

    let claims = validate_jwt(&token, &state.config.security.jwt_secret).map_err(|e| {
        tracing::warn!(
            "Authorization rejected for {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        ApiError::unauthorized("Invalid or expired token")
    })?;

    if !claims.access.can_write() {
        tracing::warn!("Subject '{}' lacks write access", claims.sub);
        return Err(ApiError::forbidden("Write access required"));
    }

    request.extensions_mut().insert(Principal::from(claims));

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
