//! NutriFlow - Main Library
//!
//! Core crate for the NutriFlow web application: user authentication and
//! session management across a stateless HTTP backend and a stateful client.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Wire types used by both backend and client
//!   - Register/login request payloads
//!   - Identity claims and user responses
//! - **`backend`** - Server-side code
//!   - Axum HTTP server exposing the `/auth` endpoint set
//!   - Password hashing, token issuance, login rate limiting
//!   - SQLite persistence for credential records
//! - **`client`** - Client-side session handling
//!   - HTTP client for the `/auth` endpoints (cookie-carrying)
//!   - Session store reconciling server responses into one auth view
//!
//! # Thread Safety
//!
//! - **Server**: per-request handlers share state via `Arc`; the login rate
//!   limiter is the only shared mutable state and is mutex-guarded
//! - **Client**: session state lives behind a mutex that is never held
//!   across an await point

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Client-side session store and API client
pub mod client;
