//! Shared Module
//!
//! Types shared between the backend and the client. Everything here is a
//! plain serde struct designed for transmission over HTTP; no side of the
//! application owns extra behavior for these types.

/// Authentication request/response types
pub mod auth;

/// Re-export commonly used types for convenience
pub use auth::{IdentityClaims, LoginRequest, MessageResponse, RegisterRequest, UserResponse};
