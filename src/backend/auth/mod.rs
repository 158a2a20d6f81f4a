//! Authentication Module
//!
//! Accounts, bearer-token sessions and the HTTP handlers that expose them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Credential store (accounts table, bcrypt)
//! ├── sessions.rs     - Token issue and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: identifier + secret → account stored → token returned
//! 2. **Login**: identifier + secret → bcrypt check → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → signature and
//!    expiry checked → account resolved → handler runs
//!
//! # Security
//!
//! - Secrets are hashed with bcrypt before storage and never returned
//! - Tokens are HS256 JWTs that expire after 7 days
//! - Failed logins return one 401 whether the identifier or the secret
//!   was wrong

/// Account model and credential store
pub mod accounts;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::Account;
pub use handlers::types::{AccountResponse, AuthResponse, CredentialsRequest};
pub use handlers::{get_me, login, register};
pub use sessions::{AccountIdentity, SessionIssuer};
