/**
 * Server Configuration
 *
 * Loads server settings from environment variables. Every setting except
 * the JWT secret has a development default; there is no fallback secret,
 * the server refuses to start without `JWT_SECRET`.
 */

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (`SERVER_PORT`, default 5000)
    pub port: u16,
    /// Database URL (`DATABASE_URL`, default local SQLite file)
    pub database_url: String,
    /// Session token signing secret (`JWT_SECRET`, required)
    pub jwt_secret: String,
    /// Session token lifetime (`TOKEN_TTL_SECS`, default 3600)
    pub token_ttl: Duration,
    /// bcrypt work factor (`BCRYPT_COST`, default bcrypt::DEFAULT_COST)
    pub bcrypt_cost: u32,
    /// Login attempts allowed per window (`LOGIN_MAX_ATTEMPTS`, default 5)
    pub max_login_attempts: u32,
    /// Login attempt window (`LOGIN_WINDOW_SECS`, default 60)
    pub login_window: Duration,
    /// `Secure` flag on session cookies; on when `APP_ENV=production`
    pub cookie_secure: bool,
    /// Frontend origin allowed to send credentialed requests (`CORS_ORIGIN`)
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is unset or any numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        Ok(Self {
            port: parse_env("SERVER_PORT", 5000)?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:nutriflow.db?mode=rwc".to_string()),
            jwt_secret,
            token_ttl: Duration::from_secs(parse_env("TOKEN_TTL_SECS", 3600)?),
            bcrypt_cost: parse_env("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            max_login_attempts: parse_env("LOGIN_MAX_ATTEMPTS", 5)?,
            login_window: Duration::from_secs(parse_env("LOGIN_WINDOW_SECS", 60)?),
            cookie_secure: std::env::var("APP_ENV")
                .map(|env| env == "production")
                .unwrap_or(false),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
