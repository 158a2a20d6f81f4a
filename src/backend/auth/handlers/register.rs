/**
 * Register Handler
 *
 * POST /api/register
 *
 * 1. Reject empty identifier or secret
 * 2. Reject an identifier that is already taken
 * 3. Hash the secret with bcrypt
 * 4. Store the account (never privileged)
 * 5. Issue a token and return it with the account
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::backend::auth::accounts::register as register_account;
use crate::backend::auth::handlers::types::{AccountResponse, AuthResponse, CredentialsRequest};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - empty field, malformed body, or identifier taken
/// * `500 Internal Server Error` - hashing, database, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// { "identifier": "alice", "secret": "pw1" }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<AuthResponse>)> {
    let Json(request) = payload?;
    tracing::info!("Register request for: {}", request.identifier);

    let account = register_account(
        &app_state.db_pool,
        &request.identifier,
        &request.secret,
        app_state.config.bcrypt_cost,
    )
    .await?;

    let token = app_state.sessions.issue(account.id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            account: AccountResponse::from(&account),
        }),
    ))
}
