//! Application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::backend::auth::rate_limit::LoginRateLimiter;
use crate::backend::auth::sessions::TokenService;

/// State shared by all request handlers.
///
/// Everything here is cheap to clone. The rate limiter is held behind a
/// trait object so a shared store can replace the in-memory counters when
/// the server runs horizontally scaled.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Session token issuance and verification
    pub tokens: TokenService,
    /// Login attempt limiter, keyed by email
    pub limiter: Arc<dyn LoginRateLimiter>,
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}
