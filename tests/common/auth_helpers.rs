//! Authentication test helpers
//!
//! Provides utilities for creating test accounts and tokens.

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use blogmark::backend::auth::accounts::{hash_secret, insert_account};

use super::server::{TestApp, TEST_BCRYPT_COST};

/// A registered account and its bearer token
pub struct TestAccount {
    pub id: Uuid,
    pub identifier: String,
    pub secret: String,
    pub token: String,
}

fn account_from_auth_body(body: &Value, secret: &str) -> TestAccount {
    TestAccount {
        id: body["account"]["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("auth response should carry an account id"),
        identifier: body["account"]["identifier"]
            .as_str()
            .expect("auth response should carry an identifier")
            .to_string(),
        secret: secret.to_string(),
        token: body["token"]
            .as_str()
            .expect("auth response should carry a token")
            .to_string(),
    }
}

/// Register through `POST /api/register`
pub async fn register_account(app: &TestApp, identifier: &str, secret: &str) -> TestAccount {
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "identifier": identifier, "secret": secret }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    account_from_auth_body(&response.json::<Value>(), secret)
}

/// Log in through `POST /api/login`
pub async fn login_account(app: &TestApp, identifier: &str, secret: &str) -> TestAccount {
    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "identifier": identifier, "secret": secret }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    account_from_auth_body(&response.json::<Value>(), secret)
}

/// Insert a privileged account directly and log in as it
pub async fn create_privileged_account(app: &TestApp, identifier: &str) -> TestAccount {
    let secret = "admin-secret";
    let hash = hash_secret(secret, TEST_BCRYPT_COST)
        .await
        .expect("Failed to hash secret");
    insert_account(&app.pool, identifier, &hash, true)
        .await
        .expect("Failed to insert privileged account");
    login_account(app, identifier, secret).await
}

/// Create a post as `account` and return its JSON
pub async fn create_post(app: &TestApp, account: &TestAccount, title: &str, body: &str) -> Value {
    let response = app
        .server
        .post("/api/posts")
        .authorization_bearer(&account.token)
        .json(&json!({ "title": title, "body": body }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}
