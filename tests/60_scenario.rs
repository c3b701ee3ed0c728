mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_read_replace_delete_round_trip() -> Result<()> {
    let app = common::build_test_app().await?;
    let token = common::write_token();

    let res = app
        .send(common::json_request(
            Method::POST,
            "/planets",
            &json!({ "name": "Mars", "type": "TERRESTRIAL" }),
            Some(&token),
        ))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = common::body_json(res).await?;
    let uri = format!("/planets/{}", created["id"]);

    let res = app.send(common::get(&uri)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(common::body_json(res).await?, created);

    let res = app
        .send(common::json_request(
            Method::PUT,
            &uri,
            &json!({ "name": "Mars II", "type": "TERRESTRIAL" }),
            Some(&token),
        ))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = common::body_json(res).await?;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Mars II");

    let res = app
        .send(common::empty_request(Method::DELETE, &uri, Some(&token)))
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.send(common::get(&uri)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
