//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback and layers
//! └── api_routes.rs   - Public and protected API routes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use blogmark::backend::routes::create_router;
//!
//! let router = create_router(app_state);
//! axum::serve(listener, router).await?;
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
