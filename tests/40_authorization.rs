mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use planets_api::auth::{generate_jwt, Access, Claims};

/// One request per mutating endpoint against planet `id`
fn mutating_requests(id: i64, token: Option<&str>) -> Vec<axum::http::Request<axum::body::Body>> {
    let payload = json!({ "name": "Intruder", "type": "DWARF" });
    vec![
        common::json_request(Method::POST, "/planets", &payload, token),
        common::json_request(Method::PUT, &format!("/planets/{}", id), &payload, token),
        common::empty_request(Method::DELETE, &format!("/planets/{}", id), token),
        common::multipart_request(
            &format!("/planets/{}/photo", id),
            common::multipart_body("photo", "x.png", "image/png", b"\x89PNG"),
            token,
        ),
    ]
}

async fn assert_untouched(app: &common::TestApp, original: &serde_json::Value) -> Result<()> {
    let list = common::body_json(app.send(common::get("/planets")).await).await?;
    assert_eq!(list, json!([original]));
    assert!(app.stored_photos().is_empty(), "photo was written: {:?}", app.stored_photos());
    Ok(())
}

#[tokio::test]
async fn missing_credentials_are_401_with_no_side_effect() -> Result<()> {
    let app = common::build_test_app().await?;
    let planet =
        common::create_planet(&app, &json!({ "name": "Earth", "type": "TERRESTRIAL" })).await?;
    let id = planet["id"].as_i64().unwrap_or_default();

    for req in mutating_requests(id, None) {
        let label = format!("{} {}", req.method(), req.uri());
        let res = app.send(req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", label);
        let body = common::body_json(res).await?;
        assert_eq!(body["message"], "Missing Authorization header", "{}", label);
    }

    assert_untouched(&app, &planet).await
}

#[tokio::test]
async fn invalid_tokens_are_401() -> Result<()> {
    let app = common::build_test_app().await?;
    let planet =
        common::create_planet(&app, &json!({ "name": "Earth", "type": "TERRESTRIAL" })).await?;
    let id = planet["id"].as_i64().unwrap_or_default();

    let forged = generate_jwt(&Claims::new("mallory", Access::Write, 1)?, "other-secret")?;
    let mut expired_claims = Claims::new("tester", Access::Write, 1)?;
    expired_claims.iat -= 7200;
    expired_claims.exp = chrono::Utc::now().timestamp() - 3600;
    let expired = generate_jwt(&expired_claims, common::SECRET)?;

    for token in [forged.as_str(), expired.as_str(), "not-a-jwt"] {
        for req in mutating_requests(id, Some(token)) {
            let label = format!("{} {}", req.method(), req.uri());
            let res = app.send(req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", label);
        }
    }

    assert_untouched(&app, &planet).await
}

#[tokio::test]
async fn read_only_token_is_403() -> Result<()> {
    let app = common::build_test_app().await?;
    let planet =
        common::create_planet(&app, &json!({ "name": "Earth", "type": "TERRESTRIAL" })).await?;
    let id = planet["id"].as_i64().unwrap_or_default();
    let read_token = common::token(Access::Read);

    for req in mutating_requests(id, Some(&read_token)) {
        let label = format!("{} {}", req.method(), req.uri());
        let res = app.send(req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", label);
    }

    assert_untouched(&app, &planet).await
}

#[tokio::test]
async fn authorization_runs_before_validation() -> Result<()> {
    let app = common::build_test_app().await?;

    // Invalid body, no credentials: the gate answers first
    let res = app
        .send(common::json_request(Method::POST, "/planets", &json!({}), None))
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn empty_secret_rejects_every_token() -> Result<()> {
    let app = common::build_test_app_with(
        std::sync::Arc::new(planets_api::database::MemoryPlanetStore::new()),
        |config| config.security.jwt_secret.clear(),
    )
    .await?;

    let res = app
        .send(common::json_request(
            Method::POST,
            "/planets",
            &json!({ "name": "Mars", "type": "TERRESTRIAL" }),
            Some(&common::write_token()),
        ))
        .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn reads_need_no_credentials() -> Result<()> {
    let app = common::build_test_app().await?;
    let planet =
        common::create_planet(&app, &json!({ "name": "Earth", "type": "TERRESTRIAL" })).await?;

    assert_eq!(app.send(common::get("/planets")).await.status(), StatusCode::OK);
    assert_eq!(
        app.send(common::get(&format!("/planets/{}", planet["id"]))).await.status(),
        StatusCode::OK
    );
    Ok(())
}
