//! Authentication API integration tests
//!
//! Tests for registration, login and the current-account endpoint.

mod common;

use axum::http::StatusCode;
use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use blogmark::backend::auth::SessionIssuer;
use common::*;

#[tokio::test]
async fn test_register_success() {
    let app = test_app().await;

    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": "alice", "secret": "pw1" }))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["account"]["identifier"], "alice");
    assert_eq!(body["account"]["isPrivileged"], false);
    assert!(body["account"].get("secret").is_none());
    assert!(body["account"].get("secretHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_identifier() {
    let app = test_app().await;
    register_account(&app, "alice", "pw1").await;

    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": "alice", "secret": "other" }))
        .await;

    assert_api_error!(response, StatusCode::BAD_REQUEST, "Identifier already exists");
}

#[tokio::test]
async fn test_register_validation() {
    let app = test_app().await;

    let empty = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": "", "secret": "pw1" }))
        .await;
    assert_api_error!(empty, StatusCode::BAD_REQUEST);

    let missing = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": "alice" }))
        .await;
    let message = assert_api_error!(missing, StatusCode::BAD_REQUEST);
    assert_contains!(message, "secret");

    let malformed = app
        .server
        .post("/api/register")
        .content_type("application/json")
        .text("{not json")
        .await;
    assert_api_error!(malformed, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_never_grants_privilege() {
    let app = test_app().await;

    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": "mallory", "secret": "pw", "isPrivileged": true }))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["account"]["isPrivileged"], false);
}

#[tokio::test]
async fn test_login_success() {
    let app = test_app().await;
    let registered = register_account(&app, "alice", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "identifier": "alice", "secret": "pw1" }))
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["account"]["id"], registered.id.to_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app().await;
    register_account(&app, "alice", "pw1").await;

    let wrong_secret = app
        .server
        .post("/api/login")
        .json(&json!({ "identifier": "alice", "secret": "nope" }))
        .await;
    let unknown = app
        .server
        .post("/api/login")
        .json(&json!({ "identifier": "nobody", "secret": "pw1" }))
        .await;

    let first = assert_api_error!(wrong_secret, StatusCode::UNAUTHORIZED);
    let second = assert_api_error!(unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(first, "Invalid credentials");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_me_with_token() {
    let app = test_app().await;
    let alice = register_account(&app, "alice", "pw1").await;

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&alice.token)
        .await;

    assert_status!(response, StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], alice.id.to_string());
    assert_eq!(body["identifier"], "alice");
}

#[tokio::test]
async fn test_me_rejects_missing_and_bad_tokens() {
    let app = test_app().await;
    let alice = register_account(&app, "alice", "pw1").await;

    let missing = app.server.get("/api/me").await;
    assert_api_error!(missing, StatusCode::UNAUTHORIZED, "Authentication required");

    let garbage = app
        .server
        .get("/api/me")
        .authorization_bearer("not-a-token")
        .await;
    assert_api_error!(garbage, StatusCode::UNAUTHORIZED);

    let foreign = SessionIssuer::new(b"some-other-key").issue(alice.id).unwrap();
    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&foreign)
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED);

    let expired = SessionIssuer::new(TEST_SIGNING_SECRET.as_bytes())
        .with_ttl(TimeDelta::hours(-2))
        .issue(alice.id)
        .unwrap();
    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&expired)
        .await;
    assert_api_error!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_account_is_rejected() {
    let app = test_app().await;
    let token = SessionIssuer::new(TEST_SIGNING_SECRET.as_bytes())
        .issue(uuid::Uuid::new_v4())
        .unwrap();

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&token)
        .await;

    assert_api_error!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_seeded_accounts_can_log_in() {
    let app = seeded_test_app().await;

    let admin = login_account(&app, "admin", "admin123").await;
    let user = login_account(&app, "user1", "user123").await;

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&admin.token)
        .await;
    let body: Value = response.json();
    assert_eq!(body["isPrivileged"], true);

    let response = app
        .server
        .get("/api/me")
        .authorization_bearer(&user.token)
        .await;
    let body: Value = response.json();
    assert_eq!(body["isPrivileged"], false);
}
