//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - bearer-token verification for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use blogmark::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/me", get(get_me))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthAccount};
