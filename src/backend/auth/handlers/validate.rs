//! Session validation handler.
//!
//! GET /auth/validate: reads the session cookie and returns the verified
//! identity claims. Any failure - missing cookie, malformed token, bad
//! signature, expiry - is a bare 401 with no detail; the distinctions are
//! logged inside the token service.

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::IdentityClaims;

/// Session validation handler
pub async fn validate(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<IdentityClaims>, ApiError> {
    let token = jar
        .get(cookie::SESSION_COOKIE)
        .ok_or(ApiError::Unauthorized)?;

    let claims = state
        .tokens
        .verify(token.value())
        .map_err(|_| ApiError::Unauthorized)?;

    Ok(Json(claims))
}
