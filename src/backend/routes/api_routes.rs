/**
 * API Route Handlers
 *
 * Wires the auth and post handlers onto their paths. Routes are split in
 * two groups: public routes that anyone may call, and protected routes
 * that run behind `auth_middleware`.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/register` - Account registration
 * - `POST /api/login` - Account login
 * - `GET /api/posts` - List posts
 * - `GET /api/posts/{id}` - Get one post
 *
 * ## Protected (bearer token)
 * - `GET /api/me` - Current account
 * - `POST /api/posts` - Create post
 * - `PUT /api/posts/{id}` - Edit post
 * - `DELETE /api/posts/{id}` - Delete post
 * - `POST /api/posts/{id}/comments` - Add comment
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::handlers::{
    add_comment, create_post, delete_post, edit_post, get_post, list_posts,
};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
}

/// Routes that require `Authorization: Bearer <token>`
///
/// The middleware is attached with `route_layer`, so it only runs for
/// requests that match one of these routes.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", put(edit_post).delete(delete_post))
        .route("/api/posts/{id}/comments", post(add_comment))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
