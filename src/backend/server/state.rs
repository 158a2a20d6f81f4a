/**
 * Application State Management
 *
 * `AppState` is the single value handed to the router. It holds the three
 * things a handler can need: the database pool, the session issuer and the
 * configuration it was built from. All three are cheap to clone.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * use, e.g. `State(pool): State<SqlitePool>` for the read-only routes.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionIssuer;
use crate::backend::server::config::ServerConfig;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool; the only shared mutable resource
    pub db_pool: SqlitePool,

    /// Mints and verifies bearer tokens
    pub sessions: Arc<SessionIssuer>,

    /// Configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from a loaded configuration and an open pool
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Self {
        let sessions = Arc::new(SessionIssuer::from_config(&config));
        Self {
            db_pool,
            sessions,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<SessionIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// In-memory state for handler tests
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let config = ServerConfig::builder()
        .signing_secret("test-signing-key")
        .database_url("sqlite::memory:")
        .bcrypt_cost(4)
        .build()
        .unwrap();
    let pool = crate::backend::server::config::connect_database(&config.database_url)
        .await
        .unwrap();
    AppState::new(config, pool)
}
