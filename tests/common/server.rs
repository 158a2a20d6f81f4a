//! Application fixture
//!
//! Builds the full router over a fresh in-memory SQLite database. The pool
//! is kept alongside the server so tests can set up state the HTTP API
//! cannot create, such as privileged accounts.

use axum_test::TestServer;
use sqlx::SqlitePool;

use blogmark::backend::routes::create_router;
use blogmark::backend::seed::seed_demo_data;
use blogmark::backend::server::config::connect_database;
use blogmark::backend::server::{AppState, ServerConfig};

/// Cheapest cost bcrypt accepts, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_SIGNING_SECRET: &str = "integration-test-signing-key";

pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .signing_secret(TEST_SIGNING_SECRET)
        .database_url("sqlite::memory:")
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test config should be valid")
}

/// Empty store
pub async fn test_app() -> TestApp {
    let config = test_config();
    let pool = connect_database(&config.database_url)
        .await
        .expect("Failed to open in-memory database");
    let router = create_router(AppState::new(config, pool.clone()));
    let server = TestServer::new(router).expect("Failed to start test server");
    TestApp { server, pool }
}

/// Store with the demo accounts and post
pub async fn seeded_test_app() -> TestApp {
    let app = test_app().await;
    seed_demo_data(&app.pool, TEST_BCRYPT_COST)
        .await
        .expect("Failed to seed demo data");
    app
}
