//! Posts Module
//!
//! Blog posts and their embedded, append-only comment threads.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Queries over the posts table
//! ├── service.rs   - Content service and authorization
//! ├── types.rs     - Request and response bodies
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod service;
pub mod types;

pub use service::can_mutate;
pub use types::{AckResponse, CommentRequest, PostRequest};
