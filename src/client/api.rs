//! HTTP client for the auth endpoints.
//!
//! Owns the cookie jar: the session token only ever travels in the
//! `HttpOnly` cookie the server sets, so this client stores cookies between
//! calls and nothing else in the application touches them.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::config::ClientConfig;
use crate::client::error::AuthError;
use crate::shared::{
    IdentityClaims, LoginRequest, MessageResponse, RegisterRequest, UserResponse,
};

/// Client for the `/auth` endpoint set.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: Client,
    config: ClientConfig,
}

impl AuthApi {
    /// Build a client with a cookie store and the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, AuthError> {
        let response = self
            .http
            .post(self.config.api_url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Log in; on success the server response carries the session cookie,
    /// which the internal jar picks up for subsequent calls.
    pub async fn login(&self, request: &LoginRequest) -> Result<MessageResponse, AuthError> {
        let response = self
            .http
            .post(self.config.api_url("/auth/login"))
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Ask the server who the current session belongs to.
    pub async fn validate(&self) -> Result<IdentityClaims, AuthError> {
        let response = self
            .http
            .get(self.config.api_url("/auth/validate"))
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Log out; the server clears the cookie and the jar drops it.
    pub async fn logout(&self) -> Result<MessageResponse, AuthError> {
        let response = self
            .http
            .post(self.config.api_url("/auth/logout"))
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Single choke point: every non-success response is classified here.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AuthError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                });
            return Err(AuthError::from_status(status, message));
        }

        response.json::<T>().await.map_err(AuthError::from)
    }
}
