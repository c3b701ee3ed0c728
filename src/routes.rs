use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{self, planets};
use crate::middleware::{match_planet_id, require_authorization};
use crate::state::AppState;

/// Build the full application router.
///
/// Per-route stage order: numeric id match, then authorization, then body
/// validation or multipart parsing (extractors), then the handler. A
/// rejection at any stage stops the chain before the store is touched. A
/// method with no handler on a known path is answered like an unmatched
/// route rather than with 405.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        // Public
        .route("/", get(handlers::root).fallback(handlers::fallback))
        .route("/health", get(handlers::health).fallback(handlers::fallback))
        .merge(planet_routes(&state))
        .fallback(handlers::fallback)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn planet_routes(state: &AppState) -> Router<AppState> {
    let authorized = || from_fn_with_state(state.clone(), require_authorization);

    Router::new()
        .route(
            "/planets",
            get(planets::list)
                .merge(post(planets::create).route_layer(authorized()))
                .fallback(handlers::fallback),
        )
        .route(
            "/planets/:id",
            get(planets::get)
                .merge(
                    put(planets::replace)
                        .delete(planets::delete)
                        .route_layer(authorized()),
                )
                .route_layer(from_fn(match_planet_id))
                .fallback(handlers::fallback),
        )
        .route(
            "/planets/:id/photo",
            post(planets::upload_photo)
                .layer(DefaultBodyLimit::max(state.config.uploads.max_bytes))
                .route_layer(authorized())
                .route_layer(from_fn(match_planet_id))
                .fallback(handlers::fallback),
        )
        // Stored photos, served straight from the uploads directory. Misses and
        // non-GET methods land on the same fallback as unmatched routes.
        .nest_service(
            "/planets/photo",
            ServeDir::new(state.photos.root())
                .call_fallback_on_method_not_allowed(true)
                .fallback(handlers::fallback.into_service()),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}
