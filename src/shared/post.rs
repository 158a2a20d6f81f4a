//! Post and Comment Types
//!
//! A post owns its comments outright: they have no id of their own and live
//! and die with the post. Insertion order is display order.
//!
//! Field names are serialized in camelCase to match the JSON the browser
//! client consumes (`authorHandle`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A comment embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment text (non-empty)
    pub text: String,
    /// Identifier of the commenting account
    pub author_handle: String,
    /// When the comment was appended
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment stamped with the current time
    pub fn new(text: impl Into<String>, author_handle: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author_handle: author_handle.into(),
            created_at: Utc::now(),
        }
    }
}

/// A blog post with its ordered comment thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// System-generated post ID
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body (markdown in practice, opaque here)
    pub body: String,
    /// Identifier of the account that created the post
    pub author_handle: String,
    /// When the post was created
    pub created_at: DateTime<Utc>,
    /// Comments in insertion order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post with no comments
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author_handle: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            author_handle: author_handle.into(),
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }
}

/// Reject a missing or blank required text field
///
/// The value itself is stored untouched; only whitespace-only input is
/// treated as empty.
pub fn require_text(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}
