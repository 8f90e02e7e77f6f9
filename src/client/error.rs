//! Failure classification for auth endpoint calls.
//!
//! Every call the client makes funnels its failure through this module, so
//! "what does a 503 mean" is answered in exactly one place and the UI reacts
//! the same way no matter which operation failed. The kinds drive UI policy:
//! `Unauthorized` means "show the login screen, nothing is wrong", the rest
//! mean "tell the user, but do not evict a possibly live session".

use std::fmt;

use reqwest::StatusCode;

/// What went wrong, from the client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// 401: no valid session. Expected for logged-out visitors.
    Unauthorized,
    /// 403: authenticated but not allowed
    Forbidden,
    /// The server could not be reached at all
    Network,
    /// 500
    ServerError,
    /// 503
    Unavailable,
    /// Any other non-success response
    Unknown,
}

/// A classified failure from an auth endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
    pub kind: AuthErrorKind,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Classify an HTTP response status.
    ///
    /// `body_message` is the server-sent `message` field, if any; it is only
    /// used for statuses without a canned description.
    pub fn from_status(status: StatusCode, body_message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::new(
                AuthErrorKind::Unauthorized,
                "Session expired. Please log in again.",
            ),
            StatusCode::FORBIDDEN => Self::new(
                AuthErrorKind::Forbidden,
                "Access forbidden. You don't have permission.",
            ),
            StatusCode::INTERNAL_SERVER_ERROR => Self::new(
                AuthErrorKind::ServerError,
                "Internal server error. Please try again later.",
            ),
            StatusCode::SERVICE_UNAVAILABLE => Self::new(
                AuthErrorKind::Unavailable,
                "Service temporarily unavailable.",
            ),
            other => Self::new(
                AuthErrorKind::Unknown,
                body_message.unwrap_or_else(|| format!("Request failed: {other}")),
            ),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::new(
                AuthErrorKind::Network,
                "Network error. Please check your connection.",
            )
        } else {
            Self::new(AuthErrorKind::Unknown, err.to_string())
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let cases = [
            (StatusCode::UNAUTHORIZED, AuthErrorKind::Unauthorized),
            (StatusCode::FORBIDDEN, AuthErrorKind::Forbidden),
            (StatusCode::INTERNAL_SERVER_ERROR, AuthErrorKind::ServerError),
            (StatusCode::SERVICE_UNAVAILABLE, AuthErrorKind::Unavailable),
            (StatusCode::NOT_FOUND, AuthErrorKind::Unknown),
            (StatusCode::TOO_MANY_REQUESTS, AuthErrorKind::Unknown),
        ];

        for (status, kind) in cases {
            assert_eq!(AuthError::from_status(status, None).kind, kind, "{status}");
        }
    }

    #[test]
    fn test_unknown_status_uses_server_message() {
        let err = AuthError::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            Some("Too many login attempts, try again later".to_string()),
        );
        assert_eq!(err.kind, AuthErrorKind::Unknown);
        assert_eq!(err.message, "Too many login attempts, try again later");
    }

    #[test]
    fn test_canned_messages_ignore_body() {
        let err = AuthError::from_status(
            StatusCode::UNAUTHORIZED,
            Some("token exp claim invalid".to_string()),
        );
        // Whatever detail the server sent, a 401 reads the same.
        assert_eq!(err.message, "Session expired. Please log in again.");
    }
}
