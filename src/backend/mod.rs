//! Backend Module
//!
//! Server-side code for NutriFlow: an Axum HTTP server exposing the
//! authentication endpoint set (`register`, `login`, `validate`, `logout`)
//! plus the pieces it composes.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Router construction and the `/auth` route table
//! - **`auth`** - Password hashing, session tokens, rate limiting, the
//!   credential store and the HTTP handlers
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # State Management
//!
//! Handlers share an [`server::state::AppState`]: the SQLite pool, the token
//! service, cookie settings, and the login rate limiter. Requests are
//! otherwise stateless; registration races are resolved by the database's
//! unique email index rather than any in-process locking.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
