//! Backend Module
//!
//! All server-side code for Blogmark: an Axum HTTP server over SQLite with
//! bearer-token authentication and author/admin authorization.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Public and protected route assembly
//! - **`auth`** - Credential store, sessions, auth handlers
//! - **`posts`** - Content service and post handlers
//! - **`middleware`** - Bearer-token verification
//! - **`error`** - Backend error taxonomy and HTTP mapping
//! - **`seed`** - Demo data for development
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and sessions
//! ├── posts/          - Posts and comments
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! └── seed.rs         - Demo data
//! ```
//!
//! # Request Flow
//!
//! Read-only post routes go straight to their handlers. Every other route
//! passes through `auth_middleware`, which verifies the bearer token and
//! resolves the account before the handler runs. Handlers return
//! `BackendResult<T>`; errors render as `{"error": ..., "status": ...}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use blogmark::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Accounts and sessions
pub mod auth;

/// Posts and comments
pub mod posts;

/// Middleware for request processing
pub mod middleware;

/// Demo data
pub mod seed;

/// Re-export commonly used types
pub use error::{BackendError, BackendResult};
pub use server::create_app;
