/**
 * Post Persistence
 *
 * Queries over the `posts` table. Each post row embeds its comment thread
 * as a JSON array in the `comments` column, so every statement here is a
 * single-row operation and needs no transaction.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendResult;
use crate::shared::{Comment, Post};

/// Post row as stored in the database
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    body: String,
    author_handle: String,
    created_at: DateTime<Utc>,
    comments: Json<Vec<Comment>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            author_handle: row.author_handle,
            created_at: row.created_at,
            comments: row.comments.0,
        }
    }
}

/// Insert a new post
pub async fn insert_post(pool: &SqlitePool, post: &Post) -> BackendResult<Post> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, title, body, author_handle, created_at, comments)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, title, body, author_handle, created_at, comments
        "#,
    )
    .bind(post.id)
    .bind(&post.title)
    .bind(&post.body)
    .bind(&post.author_handle)
    .bind(post.created_at)
    .bind(Json(&post.comments))
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> BackendResult<Vec<Post>> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, body, author_handle, created_at, comments
        FROM posts
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

/// Get post by ID
pub async fn find_post(pool: &SqlitePool, id: Uuid) -> BackendResult<Option<Post>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, body, author_handle, created_at, comments
        FROM posts
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Post::from))
}

/// Replace title and body, leaving everything else untouched
///
/// Returns `None` if the post vanished.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    title: &str,
    body: &str,
) -> BackendResult<Option<Post>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = ?2, body = ?3
        WHERE id = ?1
        RETURNING id, title, body, author_handle, created_at, comments
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(body)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Post::from))
}

/// Delete a post together with its comments
///
/// Returns `false` if there was nothing to delete.
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> BackendResult<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Append a comment to the end of a post's thread
///
/// The append happens inside SQLite, so two concurrent comments on the
/// same post both survive. Returns `None` if the post does not exist.
pub async fn append_comment(
    pool: &SqlitePool,
    id: Uuid,
    comment: &Comment,
) -> BackendResult<Option<Post>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET comments = json_insert(comments, '$[#]', json(?2))
        WHERE id = ?1
        RETURNING id, title, body, author_handle, created_at, comments
        "#,
    )
    .bind(id)
    .bind(Json(comment))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Post::from))
}
