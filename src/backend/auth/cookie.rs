//! Session cookie construction.
//!
//! The token travels only in the `access_token` cookie: `HttpOnly` so client
//! script can never read it, `SameSite=Lax`, scoped to the whole origin, and
//! `Secure` when the deployment says so. Set and clear share one builder so
//! the attributes cannot drift apart; browsers only drop a cookie when the
//! clearing attributes match the ones it was set with.

use axum_extra::extract::cookie::{Cookie, SameSite};
use std::time::Duration;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "access_token";

fn base_cookie(value: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie
}

/// Cookie carrying a freshly issued token; `Max-Age` mirrors the token TTL.
pub fn session_cookie(token: String, ttl: Duration, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(token, secure);
    cookie.set_max_age(time::Duration::seconds(ttl.as_secs() as i64));
    cookie
}

/// Expired cookie with identical attributes, instructing the browser to
/// drop the session.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), secure);
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}
