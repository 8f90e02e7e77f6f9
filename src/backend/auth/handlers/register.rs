/**
 * Registration Handler
 *
 * POST /auth/register: validates the payload, hashes the password and
 * persists the credential record. The response carries the new user's id,
 * name and email and nothing else.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::{password, users};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{RegisterRequest, UserResponse};

fn validate_request(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }
    if !request.email.contains('@') {
        return Err(ApiError::Validation("Email must be a valid address".to_string()));
    }
    if request.password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - empty name, invalid email or short password
/// * `409 Conflict` - a record with this email already exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Registration request for: {}", request.email);

    validate_request(&request)?;

    let password_hash = password::hash_password(&request.password, state.bcrypt_cost)
        .map_err(|e| {
            tracing::error!("Failed to hash password: {e:?}");
            ApiError::Internal("password hashing failed".to_string())
        })?;

    // No lookup-then-insert here: the unique index on email is the only
    // arbiter, so two concurrent registrations for the same address resolve
    // to exactly one created record and one conflict.
    let user = users::create_user(&state.pool, request.name.trim(), &request.email, &password_hash)
        .await
        .map_err(|err| {
            if users::is_unique_violation(&err) {
                tracing::warn!("Email already registered: {}", request.email);
                ApiError::EmailTaken
            } else {
                ApiError::Database(err)
            }
        })?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }),
    ))
}
