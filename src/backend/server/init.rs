/**
 * Server Initialization
 *
 * 1. Open the database and run migrations
 * 2. Seed demo data into an empty store, if enabled
 * 3. Build `AppState` (session issuer from the configured key)
 * 4. Create the router
 *
 * Unlike optional integrations, the database is required: a connection or
 * migration failure aborts startup.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::seed::seed_demo_data;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing blogmark backend server");

    let db_pool = connect_database(&config.database_url).await?;

    if config.seed_demo_data {
        seed_demo_data(&db_pool, config.bcrypt_cost).await?;
    }

    let app_state = AppState::new(config, db_pool);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
