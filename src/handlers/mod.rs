// handlers/mod.rs - HTTP handlers
//
// Public:    GET /, GET /health, GET /planets, GET /planets/:id, GET /planets/photo/*
// Protected: POST /planets, PUT|DELETE /planets/:id, POST /planets/:id/photo
//
// Protected routes get the authorization gate as a route layer (see routes.rs),
// so handlers here only see requests that already passed it.

pub mod health;
pub mod planets;

use axum::{extract::OriginalUri, http::Method, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;

pub use health::health;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Planets API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "planets": "/planets[/:id] (GET public, POST/PUT/DELETE protected)",
            "photo_upload": "/planets/:id/photo (protected, multipart field \"photo\")",
            "photos": "/planets/photo/:filename (public)",
        }
    }))
}

/// Catch-all for requests that match no route.
///
/// Takes the original URI so nested services (the photo directory) report
/// the full request path, not the prefix-stripped one.
pub async fn fallback(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::cannot(&method, uri.path())
}
