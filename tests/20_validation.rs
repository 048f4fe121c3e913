mod common;

use anyhow::Result;
use axum::http::StatusCode;
use uuid::Uuid;

use common::{offline_app, post_json, send, token_for};

#[tokio::test]
async fn missing_title_is_400() -> Result<()> {
    let (app, config) = offline_app()?;
    let token = token_for(&config, Uuid::new_v4(), Uuid::new_v4())?;

    let res = send(&app, post_json("/api/example", Some(&token), r#"{"description":"no title"}"#)).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let body = res.json()?;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Title is required");
    Ok(())
}

#[tokio::test]
async fn empty_body_is_treated_as_empty_object() -> Result<()> {
    let (app, config) = offline_app()?;
    let token = token_for(&config, Uuid::new_v4(), Uuid::new_v4())?;

    let res = send(&app, post_json("/api/example", Some(&token), "")).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()?["message"], "Title is required");
    Ok(())
}

#[tokio::test]
async fn invalid_json_is_400() -> Result<()> {
    let (app, config) = offline_app()?;
    let token = token_for(&config, Uuid::new_v4(), Uuid::new_v4())?;

    let res = send(&app, post_json("/api/example", Some(&token), "{title:")).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()?["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn wrong_priority_type_is_400() -> Result<()> {
    let (app, config) = offline_app()?;
    let token = token_for(&config, Uuid::new_v4(), Uuid::new_v4())?;

    let res = send(
        &app,
        post_json("/api/example", Some(&token), r#"{"title":"x","priority":"high"}"#),
    )
    .await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn valid_body_reaches_the_database() -> Result<()> {
    let (app, config) = offline_app()?;
    let token = token_for(&config, Uuid::new_v4(), Uuid::new_v4())?;

    let res = send(&app, post_json("/api/example", Some(&token), r#"{"title":"Buy milk"}"#)).await?;

    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json()?;
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert!(!body["message"].as_str().unwrap_or_default().contains("127.0.0.1"));
    Ok(())
}
