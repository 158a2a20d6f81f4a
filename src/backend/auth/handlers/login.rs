/**
 * Login Handler
 *
 * POST /api/login
 *
 * Unknown identifiers and wrong secrets produce the same 401 and the same
 * message. bcrypt comparison runs off the async executor.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::accounts::verify_credentials;
use crate::backend::auth::handlers::types::{AccountResponse, AuthResponse, CredentialsRequest};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown identifier or wrong secret
/// * `400 Bad Request` - malformed body
/// * `500 Internal Server Error` - database or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "account": { "id": "…", "identifier": "alice", "isPrivileged": false }
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> BackendResult<Json<AuthResponse>> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.identifier);

    let account = verify_credentials(
        &app_state.db_pool,
        &request.identifier,
        &request.secret,
        app_state.config.bcrypt_cost,
    )
    .await?;
    let token = app_state.sessions.issue(account.id)?;

    tracing::info!("Account logged in: {}", account.identifier);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        account: AccountResponse::from(&account),
    }))
}
