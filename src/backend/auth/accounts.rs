/**
 * Account Model and Credential Store
 *
 * This module owns the `accounts` table: registration, credential checks
 * and lookups. Password hashing is an explicit step (`hash_secret`) that
 * callers run before `insert_account`; there is no implicit save hook.
 *
 * Hashing and verification run on the blocking thread pool.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::AccountIdentity;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::require_text;

/// Account row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: Uuid,
    /// Unique public handle
    pub identifier: String,
    /// bcrypt hash of the account secret
    pub secret_hash: String,
    /// Override authorization over all content
    pub is_privileged: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The part of the account downstream authorization needs
    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity {
            id: self.id,
            identifier: self.identifier.clone(),
            is_privileged: self.is_privileged,
        }
    }
}

/// Hash a raw secret with bcrypt on the blocking pool
pub async fn hash_secret(raw_secret: &str, cost: u32) -> BackendResult<String> {
    let raw_secret = raw_secret.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(raw_secret, cost)).await??;
    Ok(hashed)
}

/// Compare a raw secret against a stored bcrypt hash on the blocking pool
pub async fn verify_secret(raw_secret: &str, secret_hash: &str) -> BackendResult<bool> {
    let raw_secret = raw_secret.to_owned();
    let secret_hash = secret_hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(raw_secret, &secret_hash)).await??;
    Ok(valid)
}

/// Insert an account whose secret has already been hashed
///
/// A unique-index violation on `identifier` (two registrations racing past
/// the existence check) is reported as `DuplicateIdentifier`.
pub async fn insert_account(
    pool: &SqlitePool,
    identifier: &str,
    secret_hash: &str,
    is_privileged: bool,
) -> BackendResult<Account> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (id, identifier, secret_hash, is_privileged, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, identifier, secret_hash, is_privileged, created_at
        "#,
    )
    .bind(id)
    .bind(identifier)
    .bind(secret_hash)
    .bind(is_privileged)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            BackendError::DuplicateIdentifier
        }
        other => other.into(),
    })?;

    Ok(account)
}

/// Get account by identifier
pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> BackendResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, identifier, secret_hash, is_privileged, created_at
        FROM accounts
        WHERE identifier = ?1
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Get account by ID
pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> BackendResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, identifier, secret_hash, is_privileged, created_at
        FROM accounts
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Number of registered accounts
pub async fn count_accounts(pool: &SqlitePool) -> BackendResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Register a new, unprivileged account
///
/// # Errors
///
/// * `ValidationError` - identifier or secret is empty
/// * `DuplicateIdentifier` - identifier is taken
/// * `Internal` - hashing or database failure
pub async fn register(
    pool: &SqlitePool,
    identifier: &str,
    raw_secret: &str,
    cost: u32,
) -> BackendResult<Account> {
    require_text("identifier", identifier)?;
    require_text("secret", raw_secret)?;

    if find_by_identifier(pool, identifier).await?.is_some() {
        tracing::warn!("Identifier already exists: {}", identifier);
        return Err(BackendError::DuplicateIdentifier);
    }

    let secret_hash = hash_secret(raw_secret, cost).await?;
    let account = insert_account(pool, identifier, &secret_hash, false).await?;

    tracing::info!("Account registered: {}", account.identifier);
    Ok(account)
}

/// Check an identifier/secret pair
///
/// Unknown identifiers and wrong secrets both yield `InvalidCredentials`;
/// only the server log tells them apart. An unknown identifier still pays
/// one bcrypt round at `cost`, so response time does not reveal which
/// identifiers exist.
pub async fn verify_credentials(
    pool: &SqlitePool,
    identifier: &str,
    raw_secret: &str,
    cost: u32,
) -> BackendResult<Account> {
    let account = match find_by_identifier(pool, identifier).await? {
        Some(account) => account,
        None => {
            hash_secret(raw_secret, cost).await?;
            tracing::warn!("Login for unknown identifier: {}", identifier);
            return Err(BackendError::InvalidCredentials);
        }
    };

    if !verify_secret(raw_secret, &account.secret_hash).await? {
        tracing::warn!("Invalid secret for identifier: {}", identifier);
        return Err(BackendError::InvalidCredentials);
    }

    Ok(account)
}
