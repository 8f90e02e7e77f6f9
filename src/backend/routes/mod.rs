//! Route Configuration Module
//!
//! Router assembly for the backend server.
//!
//! # Routes
//!
//! - `POST /auth/register` - account creation
//! - `POST /auth/login` - credential check, sets the session cookie
//! - `GET /auth/validate` - verifies the session cookie
//! - `POST /auth/logout` - clears the session cookie

/// Main router creation
pub mod router;

/// Authentication route handlers
pub mod auth_routes;

// Re-export commonly used functions
pub use router::create_router;
