/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login and me
 * handlers. Missing request fields deserialize as empty strings so they
 * fail validation with a 400 instead of a framework-level 422.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::accounts::Account;

/// Register and login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CredentialsRequest {
    /// Account handle
    #[serde(default)]
    pub identifier: String,
    /// Raw secret (hashed before storage, never logged)
    #[serde(default)]
    pub secret: String,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Human-readable outcome
    pub message: String,
    /// Bearer token (7-day expiration)
    pub token: String,
    /// Account information (without the secret)
    pub account: AccountResponse,
}

/// Account object safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub identifier: String,
    pub is_privileged: bool,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            identifier: account.identifier.clone(),
            is_privileged: account.is_privileged,
        }
    }
}
