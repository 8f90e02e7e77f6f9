//! Authentication Module
//!
//! Everything the session endpoint set composes: the credential store, the
//! password hasher, the token service, the login rate limiter and the HTTP
//! handlers themselves.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - Credential store (lookup/persist by email)
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - Session token issuance and verification
//! ├── rate_limit.rs   - Login attempt limiting
//! ├── cookie.rs       - Session cookie construction
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - POST /auth/register
//!     ├── login.rs    - POST /auth/login
//!     ├── validate.rs - GET /auth/validate
//!     └── logout.rs   - POST /auth/logout
//! ```
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage and never serialized
//! - Unknown email and wrong password produce identical 401 responses
//! - The session token only travels in an `HttpOnly` cookie
//! - The rate limiter runs before any credential work on login

/// Credential store: user records and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// Login attempt rate limiting
pub mod rate_limit;

/// Session cookie construction
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, logout, register, validate};
pub use rate_limit::{FixedWindowLimiter, LoginRateLimiter};
pub use sessions::{TokenError, TokenService};
