/**
 * Session Management and JWT Tokens
 *
 * A token says "account X authenticated until T" and nothing more. The
 * account's handle and privilege flag are looked up again on every
 * verification, so a token never carries stale authorization.
 */

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::accounts::find_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::config::ServerConfig;

/// Token lifetime
pub const SESSION_TTL_DAYS: i64 = 7;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Verified caller identity
#[derive(Debug, Clone, PartialEq)]
pub struct AccountIdentity {
    pub id: Uuid,
    pub identifier: String,
    pub is_privileged: bool,
}

/// Mints and verifies bearer tokens with one process-wide key
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl SessionIssuer {
    /// Create an issuer signing with the given HMAC secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl: TimeDelta::days(SESSION_TTL_DAYS),
        }
    }

    /// Create an issuer from the loaded configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.signing_key.is_insecure() {
            tracing::warn!(
                "JWT_SECRET is not set; signing tokens with the INSECURE development key"
            );
        }
        Self::new(config.signing_key.as_bytes())
    }

    /// Override the token lifetime
    pub fn with_ttl(mut self, ttl: TimeDelta) -> Self {
        self.ttl = ttl;
        self
    }

    /// Create a signed token for an account
    pub fn issue(&self, account_id: Uuid) -> BackendResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| BackendError::internal(format!("failed to sign token: {}", e)))
    }

    /// Check signature and expiry, returning the claims
    pub fn decode(&self, token: &str) -> BackendResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::warn!("Invalid token: {:?}", e);
                BackendError::Unauthenticated
            })?;
        Ok(token_data.claims)
    }

    /// Verify a token and resolve the account it names
    ///
    /// # Errors
    ///
    /// * `Unauthenticated` - bad signature, expired, malformed subject, or
    ///   the account no longer exists
    /// * `Internal` - database failure
    pub async fn verify(&self, pool: &SqlitePool, token: &str) -> BackendResult<AccountIdentity> {
        let claims = self.decode(token)?;

        let account_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Invalid account ID in token: {:?}", e);
            BackendError::Unauthenticated
        })?;

        let account = find_by_id(pool, account_id).await?.ok_or_else(|| {
            tracing::warn!("Token for unknown account: {}", account_id);
            BackendError::Unauthenticated
        })?;

        Ok(account.identity())
    }
}
