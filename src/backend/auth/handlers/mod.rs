//! Authentication Handlers
//!
//! HTTP handlers for the `/auth` endpoint set, one file per operation.
//! Request/response bodies live in [`crate::shared::auth`] so the client
//! uses the exact same types.
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - account creation
//! - **`login`**    - POST /auth/login - credential check, sets the cookie
//! - **`validate`** - GET /auth/validate - verifies the cookie token
//! - **`logout`**   - POST /auth/logout - clears the cookie

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Session validation handler
pub mod validate;

/// Logout handler
pub mod logout;

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use validate::validate;
