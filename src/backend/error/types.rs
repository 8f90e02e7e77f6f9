//! API error taxonomy.
//!
//! One variant per externally observable failure. Credential failures are
//! deliberately coarse: an unknown email and a wrong password both map to
//! `InvalidCredentials`, so the response never reveals whether an address is
//! registered. Internal failures keep their cause for logging but the HTTP
//! body only ever says "Internal server error".

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by the authentication endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registration with an email that already has an account
    #[error("Email already registered")]
    EmailTaken,

    /// Login with an unknown email or a wrong password (indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempts exceeded the configured window limit
    #[error("Too many login attempts, try again later")]
    TooManyAttempts,

    /// Missing, malformed, tampered or expired session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body failed boundary validation
    #[error("{0}")]
    Validation(String),

    /// Database failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Anything else that should never leave the server as detail
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to put in the response body.
    ///
    /// Server-side failures collapse to a fixed string; their real cause is
    /// logged where the error is constructed.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::TooManyAttempts.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_never_leak() {
        let err = ApiError::Internal("connection pool exhausted".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = ApiError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn credential_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(
            ApiError::InvalidCredentials.public_message(),
            "Invalid credentials"
        );
    }
}
