//! Shared Module
//!
//! Types that travel over the HTTP API: posts, their embedded comments and
//! the validation rules every handler applies to incoming text. Nothing in
//! here touches the database or the runtime, so the same types can be
//! reused by a Rust client.

/// Post and comment data structures
pub mod post;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use post::{Comment, Post, require_text};
pub use error::SharedError;
