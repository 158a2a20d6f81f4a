//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Account registration handler
//! ├── login.rs     - Credential check handler
//! └── me.rs        - Current account handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register
//! - **`login`** - POST /api/login
//! - **`get_me`** - GET /api/me (bearer token)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current account handler
pub mod me;

// Re-export commonly used types
pub use types::{AccountResponse, AuthResponse, CredentialsRequest};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
