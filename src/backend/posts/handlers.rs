/**
 * Post Handlers
 *
 * Thin HTTP wrappers over the content service. The read routes are
 * public and extract only the pool; the write routes run behind the auth
 * middleware and receive the caller through `AuthAccount`.
 *
 * # Routes
 *
 * - `GET /api/posts` - list, newest first
 * - `GET /api/posts/{id}` - one post
 * - `POST /api/posts` - create (201)
 * - `PUT /api/posts/{id}` - edit title and body
 * - `DELETE /api/posts/{id}` - delete with comments
 * - `POST /api/posts/{id}/comments` - append a comment (201)
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthAccount;
use crate::backend::posts::service;
use crate::backend::posts::types::{AckResponse, CommentRequest, PostRequest};
use crate::shared::Post;

/// An id that is not a UUID cannot name a post
fn parse_post_id(raw: &str) -> BackendResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found("Post"))
}

pub async fn list_posts(State(pool): State<SqlitePool>) -> BackendResult<Json<Vec<Post>>> {
    Ok(Json(service::list_posts(&pool).await?))
}

pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> BackendResult<Json<Post>> {
    let id = parse_post_id(&id)?;
    Ok(Json(service::get_post(&pool, id).await?))
}

pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthAccount(identity): AuthAccount,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<Post>)> {
    let Json(request) = payload?;
    let post = service::create_post(&pool, &identity, &request.title, &request.body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn edit_post(
    State(pool): State<SqlitePool>,
    AuthAccount(identity): AuthAccount,
    Path(id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> BackendResult<Json<Post>> {
    let id = parse_post_id(&id)?;
    let Json(request) = payload?;
    let post = service::edit_post(&pool, &identity, id, &request.title, &request.body).await?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthAccount(identity): AuthAccount,
    Path(id): Path<String>,
) -> BackendResult<Json<AckResponse>> {
    let id = parse_post_id(&id)?;
    service::delete_post(&pool, &identity, id).await?;
    Ok(Json(AckResponse::deleted()))
}

pub async fn add_comment(
    State(pool): State<SqlitePool>,
    AuthAccount(identity): AuthAccount,
    Path(id): Path<String>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<Post>)> {
    let id = parse_post_id(&id)?;
    let Json(request) = payload?;
    let post = service::add_comment(&pool, &identity, id, &request.text).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
