/**
 * Server Configuration
 *
 * This module loads the process-wide configuration once at startup and
 * opens the database it points at. The resulting `ServerConfig` is passed
 * explicitly to every component that needs it; nothing reads the
 * environment after `main`.
 *
 * # Recognized Variables
 *
 * | Variable         | Default                          |
 * |------------------|----------------------------------|
 * | `JWT_SECRET`     | fixed insecure development key   |
 * | `DATABASE_URL`   | `sqlite://blogmark.db?mode=rwc`  |
 * | `PORT`           | `5000`                           |
 * | `BCRYPT_COST`    | `10`                             |
 * | `SEED_DEMO_DATA` | `true`                           |
 * | `APP_ENV`        | unset (`production` hardens)     |
 *
 * In hardened mode a missing `JWT_SECRET` is fatal, and demo seeding
 * (which creates accounts with well-known passwords) is refused.
 */

use std::fmt;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::error::BackendError;

/// Signing key used when `JWT_SECRET` is absent outside production
pub const INSECURE_DEV_SIGNING_KEY: &str = "insecure-development-signing-key-do-not-deploy";

/// Database used when `DATABASE_URL` is absent
pub const DEFAULT_DATABASE_URL: &str = "sqlite://blogmark.db?mode=rwc";

/// Port used when `PORT` is absent
pub const DEFAULT_PORT: u16 = 5000;

/// bcrypt work factor used when `BCRYPT_COST` is absent
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Range of work factors bcrypt accepts
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} is not allowed when APP_ENV=production")]
    NotAllowedInProduction(&'static str),
}

/// Token signing key source
#[derive(Clone, PartialEq)]
pub enum SigningKey {
    /// Key supplied by the operator
    Configured(String),
    /// Built-in development key; anyone can forge tokens with it
    InsecureDevelopment,
}

impl SigningKey {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Configured(secret) => secret.as_bytes(),
            Self::InsecureDevelopment => INSECURE_DEV_SIGNING_KEY.as_bytes(),
        }
    }

    pub fn is_insecure(&self) -> bool {
        matches!(self, Self::InsecureDevelopment)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(_) => f.write_str("SigningKey::Configured(<redacted>)"),
            Self::InsecureDevelopment => f.write_str("SigningKey::InsecureDevelopment"),
        }
    }
}

/// Process-wide server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Token signing key
    pub signing_key: SigningKey,
    /// sqlx connection string
    pub database_url: String,
    /// Listening port
    pub port: u16,
    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
    /// Seed demo accounts and a sample post into an empty store
    pub seed_demo_data: bool,
    /// Running with `APP_ENV=production`
    pub hardened: bool,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder();

        let hardened = get("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("production"));
        builder = builder.hardened(hardened);

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.signing_secret(secret);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = get("PORT") {
            let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            let cost = cost.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }
        // Demo data defaults on for development and off in production.
        let seed = match get("SEED_DEMO_DATA") {
            Some(value) => parse_bool("SEED_DEMO_DATA", &value)?,
            None => !hardened,
        };
        builder = builder.seed_demo_data(seed);

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.hardened && self.signing_key.is_insecure() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.hardened && self.seed_demo_data {
            return Err(ConfigError::NotAllowedInProduction("SEED_DEMO_DATA"));
        }
        Ok(())
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    signing_key: SigningKey,
    database_url: String,
    port: u16,
    bcrypt_cost: u32,
    seed_demo_data: bool,
    hardened: bool,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            signing_key: SigningKey::InsecureDevelopment,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            seed_demo_data: false,
            hardened: false,
        }
    }
}

impl ServerConfigBuilder {
    pub fn signing_secret(mut self, secret: impl Into<String>) -> Self {
        self.signing_key = SigningKey::Configured(secret.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    pub fn hardened(mut self, hardened: bool) -> Self {
        self.hardened = hardened;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            signing_key: self.signing_key,
            database_url: self.database_url,
            port: self.port,
            bcrypt_cost: self.bcrypt_cost,
            seed_demo_data: self.seed_demo_data,
            hardened: self.hardened,
        };
        config.validate()?;
        Ok(config)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the database pool and run migrations
///
/// An in-memory database only exists for the lifetime of its connection, so
/// those URLs get a single connection that is never recycled.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?;
    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_for_local_development() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.signing_key.is_insecure());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert!(config.seed_demo_data);
        assert!(!config.hardened);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
            ("BCRYPT_COST", "4"),
            ("SEED_DEMO_DATA", "false"),
        ]))
        .unwrap();
        assert_eq!(config.signing_key, SigningKey::Configured("s3cret".into()));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bcrypt_cost, 4);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_production_requires_signing_key() {
        let result = ServerConfig::from_lookup(lookup(&[("APP_ENV", "production")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
    }

    #[test]
    fn test_production_disables_seed_by_default() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert!(config.hardened);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_production_refuses_seed() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "s3cret"),
            ("SEED_DEMO_DATA", "true"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::NotAllowedInProduction("SEED_DEMO_DATA")
        );
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let result = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { key: "PORT", .. })));

        let result = ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "2")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "BCRYPT_COST", .. })
        ));
    }

    #[test]
    fn test_signing_key_debug_is_redacted() {
        let key = SigningKey::Configured("hunter2".into());
        assert!(!format!("{:?}", key).contains("hunter2"));
    }

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
