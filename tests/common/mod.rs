#![allow(dead_code)]

use std::sync::{Arc, Once};

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use planets_api::auth::{generate_jwt, Access, Claims};
use planets_api::config::AppConfig;
use planets_api::database::{MemoryPlanetStore, PlanetStore};
use planets_api::storage::DiskPhotoStore;
use planets_api::AppState;

pub const SECRET: &str = "test-secret";
pub const BOUNDARY: &str = "planets-test-boundary";

static TRACING: Once = Once::new();

/// Router plus the temp uploads dir it serves from (kept alive with the app)
pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub fn stored_photos(&self) -> Vec<String> {
        std::fs::read_dir(self.uploads.path())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn test_config(uploads: &TempDir) -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = SECRET.to_string();
    config.uploads.dir = uploads.path().to_path_buf();
    config
}

/// App backed by a fresh in-memory store
pub async fn build_test_app() -> Result<TestApp> {
    build_test_app_with(Arc::new(MemoryPlanetStore::new()), |_| {}).await
}

/// App backed by the given store, with a hook to adjust config
pub async fn build_test_app_with(
    store: Arc<dyn PlanetStore>,
    adjust: impl FnOnce(&mut AppConfig),
) -> Result<TestApp> {
    init_tracing();

    let uploads = tempfile::tempdir()?;
    let mut config = test_config(&uploads);
    adjust(&mut config);

    let photos = DiskPhotoStore::open(uploads.path()).await?;
    let router = planets_api::app(AppState::new(store, Arc::new(photos), config));

    Ok(TestApp { router, uploads })
}

pub fn token(access: Access) -> String {
    let claims = Claims::new("tester", access, 1).expect("claims");
    generate_jwt(&claims, SECRET).expect("token")
}

pub fn write_token() -> String {
    token(Access::Write)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// JSON request, optionally carrying a bearer token
pub fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

/// multipart/form-data body with a single file part
pub fn multipart_body(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, body: Vec<u8>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).expect("request")
}

pub async fn body_bytes(response: Response<Body>) -> Result<Vec<u8>> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(bytes.to_vec())
}

pub async fn body_json(response: Response<Body>) -> Result<Value> {
    let bytes = body_bytes(response).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Create a planet through the API and return its JSON
pub async fn create_planet(app: &TestApp, body: &Value) -> Result<Value> {
    let response = app
        .send(json_request(Method::POST, "/planets", body, Some(&write_token())))
        .await;
    anyhow::ensure!(
        response.status() == axum::http::StatusCode::CREATED,
        "create failed with {}",
        response.status()
    );
    body_json(response).await
}
