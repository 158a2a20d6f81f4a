/**
 * Content Service
 *
 * Post lifecycle and comment appends with ownership-based authorization.
 * Reads are public. Every mutation takes the caller's verified
 * `AccountIdentity`, and edit and delete both go through `can_mutate`.
 */

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::AccountIdentity;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::posts::db;
use crate::shared::{require_text, Comment, Post};

/// Whether `identity` may edit or delete `post`
pub fn can_mutate(identity: &AccountIdentity, post: &Post) -> bool {
    identity.identifier == post.author_handle || identity.is_privileged
}

fn post_not_found() -> BackendError {
    BackendError::not_found("Post")
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> BackendResult<Vec<Post>> {
    db::list_posts(pool).await
}

/// A single post with its comments
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> BackendResult<Post> {
    db::find_post(pool, id).await?.ok_or_else(post_not_found)
}

/// Create a post authored by the caller
pub async fn create_post(
    pool: &SqlitePool,
    identity: &AccountIdentity,
    title: &str,
    body: &str,
) -> BackendResult<Post> {
    require_text("title", title)?;
    require_text("body", body)?;

    let post = db::insert_post(pool, &Post::new(title, body, identity.identifier.as_str())).await?;
    tracing::info!("Post created: {} by {}", post.id, post.author_handle);
    Ok(post)
}

/// Replace a post's title and body
///
/// # Errors
///
/// * `ValidationError` - empty title or body
/// * `NotFound` - no such post
/// * `Forbidden` - caller is neither the author nor privileged
pub async fn edit_post(
    pool: &SqlitePool,
    identity: &AccountIdentity,
    id: Uuid,
    title: &str,
    body: &str,
) -> BackendResult<Post> {
    require_text("title", title)?;
    require_text("body", body)?;

    let post = get_post(pool, id).await?;
    if !can_mutate(identity, &post) {
        tracing::warn!("{} may not edit post {}", identity.identifier, id);
        return Err(BackendError::forbidden("Not authorized to edit this post"));
    }

    let updated = db::update_post(pool, id, title, body)
        .await?
        .ok_or_else(post_not_found)?;
    tracing::info!("Post edited: {} by {}", id, identity.identifier);
    Ok(updated)
}

/// Delete a post and its comments
///
/// Same authorization as `edit_post`.
pub async fn delete_post(
    pool: &SqlitePool,
    identity: &AccountIdentity,
    id: Uuid,
) -> BackendResult<()> {
    let post = get_post(pool, id).await?;
    if !can_mutate(identity, &post) {
        tracing::warn!("{} may not delete post {}", identity.identifier, id);
        return Err(BackendError::forbidden("Not authorized to delete this post"));
    }

    if !db::delete_post(pool, id).await? {
        return Err(post_not_found());
    }
    tracing::info!("Post deleted: {} by {}", id, identity.identifier);
    Ok(())
}

/// Append a comment by the caller; any authenticated account may comment
pub async fn add_comment(
    pool: &SqlitePool,
    identity: &AccountIdentity,
    post_id: Uuid,
    text: &str,
) -> BackendResult<Post> {
    require_text("text", text)?;

    let comment = Comment::new(text, identity.identifier.as_str());
    db::append_comment(pool, post_id, &comment)
        .await?
        .ok_or_else(post_not_found)
}
