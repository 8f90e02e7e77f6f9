//! Authentication wire types.
//!
//! Request and response bodies for the `/auth` endpoint set. The backend
//! deserializes the requests at the boundary and the client reuses the same
//! structs when talking to the server, so the two sides cannot drift.

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the name, email and password for account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name for the new account
    pub name: String,
    /// Email address (unique per account)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User response (without sensitive data)
///
/// Returned by registration. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Identity claims embedded in a session token.
///
/// Also the body of a successful `GET /auth/validate` response. Field names
/// follow the JWT registered claim names so the struct serializes directly
/// into the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject: the user ID
    pub sub: String,
    /// Email at the time the token was minted
    pub email: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: u64,
    /// Expiry (Unix timestamp, seconds); valid while `iat <= now < exp`
    pub exp: u64,
}

/// Plain message response for operations that set or clear the session
/// cookie instead of returning data (login, logout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
