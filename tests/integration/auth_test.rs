//! Integration tests for bearer authentication and the health endpoint.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use brewhub_auth::JwtEncoder;
use brewhub_core::config::AuthConfig;

use helpers::{TestApp, recipe_data};

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/recipes", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.str("error"), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_malformed_header_is_unauthorized() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request_with_authorization("GET", "/api/recipes", &format!("Token {token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_token_is_unauthorized() {
    let app = TestApp::new();
    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    })
    .issue_access_token(Uuid::new_v4(), "mallory")
    .expect("issue")
    .access_token;

    let response = app
        .request("GET", "/api/recipes", None, Some(&foreign))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/recipes", None, Some("not.a.jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_subject_becomes_owner() {
    let app = TestApp::new();
    let user_id = Uuid::new_v4();
    let token = app.token_for(user_id);

    let id = app.create_recipe(&token, recipe_data("Owned", 15.0)).await;
    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.str("ownerId"), user_id.to_string());
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str("status"), "ok");
    assert_eq!(response.str("store"), "connected");
}
