/**
 * Current Account Handler
 *
 * GET /api/me
 *
 * Runs behind the auth middleware, so by the time this handler executes
 * the token has been verified and the account resolved.
 */

use axum::{extract::State, Json};

use crate::backend::auth::accounts::find_by_id;
use crate::backend::auth::handlers::types::AccountResponse;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthAccount;
use crate::backend::server::state::AppState;

/// Get current account handler
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthAccount(identity): AuthAccount,
) -> BackendResult<Json<AccountResponse>> {
    let account = find_by_id(&app_state.db_pool, identity.id)
        .await?
        .ok_or(BackendError::Unauthenticated)?;

    Ok(Json(AccountResponse::from(&account)))
}
