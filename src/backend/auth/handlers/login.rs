/**
 * Login Handler
 *
 * POST /auth/login: rate limit, credential check, token issuance.
 *
 * # Security
 *
 * - The rate limiter is consulted before any credential work
 * - Unknown email and wrong password return byte-identical 401 responses,
 *   so the endpoint never reveals which addresses are registered
 * - The token is emitted only as an HttpOnly cookie, never in the body
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::{cookie, password, users};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{LoginRequest, MessageResponse};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (indistinguishable)
/// * `429 Too Many Requests` - attempt limit exceeded for this email
/// * `500 Internal Server Error` - database, hashing or token failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    // Rejected attempts must cost neither a lookup nor a bcrypt run, and
    // the counter has to move even for failures, so the limiter goes first.
    if !state.limiter.allow(&request.email.to_lowercase()) {
        tracing::warn!("Login rate limit hit for: {}", request.email);
        return Err(ApiError::TooManyAttempts);
    }

    tracing::info!("Login request for: {}", request.email);

    let user = users::get_user_by_email(&state.pool, &request.email).await?;

    // Unknown email and wrong password take the same exit below.
    let Some(user) = user else {
        tracing::warn!("Login failed for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    };

    let valid = password::verify_password(&request.password, &user.password_hash)
        .map_err(|e| {
            tracing::error!("Password verification error: {e:?}");
            ApiError::Internal("password verification failed".to_string())
        })?;

    if !valid {
        tracing::warn!("Login failed for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to issue session token: {e:?}");
        ApiError::Internal("token issuance failed".to_string())
    })?;

    tracing::info!("User logged in: {}", user.email);

    let jar = jar.add(cookie::session_cookie(
        token,
        state.tokens.ttl(),
        state.cookie_secure,
    ));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Login successful".to_string(),
        }),
    ))
}
