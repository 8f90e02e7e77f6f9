/**
 * Session Tokens
 *
 * This module issues and verifies the signed JWTs that back user sessions.
 * A token carries the identity claims plus issued-at/expiry timestamps and
 * is signed with a server-held secret (HS256).
 */

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::shared::IdentityClaims;

/// Why a token was rejected.
///
/// The distinction exists for logging and tests only; every variant becomes
/// the same opaque 401 at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    BadSignature,
    #[error("token expired")]
    Expired,
}

/// Issues and verifies session tokens with a fixed secret and TTL.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Configured token lifetime. The session cookie's `Max-Age` mirrors it.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session token for a user.
    ///
    /// Expiry is `now + ttl`, server-local clock.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = IdentityClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify a token and return its claims.
    ///
    /// Rejects malformed tokens, signature mismatches and expired tokens as
    /// distinct [`TokenError`] reasons. Expiry is checked with zero leeway.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<IdentityClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| {
            let reason = match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            };
            tracing::debug!("Rejected session token: {reason}");
            reason
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(3600))
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id, "test@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let now = now_secs();

        // Token that expired an hour ago, signed with the right secret.
        let claims = IdentityClaims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenService::new("other-secret", Duration::from_secs(3600))
            .issue(Uuid::new_v4(), "test@example.com")
            .unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert_eq!(
            service().verify("not.a.token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(service().verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_ttl_boundary_is_exact() {
        let service = service();
        let now = now_secs();

        // One second left on the clock: still valid.
        let live = IdentityClaims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            iat: now - 3599,
            exp: now + 1,
        };
        let token = encode(
            &Header::default(),
            &live,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(service.verify(&token).is_ok());

        // One second past expiry: rejected, no leeway.
        let stale = IdentityClaims {
            exp: now - 1,
            ..live
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }
}
