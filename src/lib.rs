//! Blogmark - Main Library
//!
//! Blogmark is the backend of a small blogging platform: account
//! registration and login, bearer-token sessions, and posts with
//! append-only comment threads.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types used in responses
//!   - `Post` and `Comment`
//!   - Field validation and the shared error type
//!
//! - **`backend`** - The Axum server
//!   - Credential store (bcrypt) and session issuer (JWT)
//!   - Content service with author/admin authorization
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogmark::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .signing_secret("change-me")
//!     .database_url("sqlite::memory:")
//!     .build()?;
//! let app = create_app(config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures on wire types
//! - `backend::BackendError` for everything a request can fail with, each
//!   variant mapped to one HTTP status

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
