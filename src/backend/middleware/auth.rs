/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in account. The middleware pulls
 * the bearer token from the Authorization header, verifies it through the
 * session issuer and stores the resolved `AccountIdentity` in the request
 * extensions, where the `AuthAccount` extractor picks it up.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::AccountIdentity;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthenticated
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::Unauthenticated
    })?;

    let token = token.trim();
    if token.is_empty() {
        return Err(BackendError::Unauthenticated);
    }
    Ok(token)
}

/// Authentication middleware
///
/// 1. Extracts the bearer token
/// 2. Verifies signature and expiry
/// 3. Resolves the account the token names
/// 4. Attaches the identity to request extensions
///
/// Returns 401 Unauthorized if any step fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;
    let identity = app_state.sessions.verify(&app_state.db_pool, token).await?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Axum extractor for the verified caller
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthAccount(pub AccountIdentity);

impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccountIdentity>()
            .cloned()
            .map(AuthAccount)
            .ok_or_else(|| {
                tracing::warn!("AccountIdentity not found in request extensions");
                BackendError::Unauthenticated
            })
    }
}
