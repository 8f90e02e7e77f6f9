/**
 * Server Initialization
 *
 * Assembles the Axum application from configuration: database pool,
 * migrations, token service, rate limiter, router and (when configured)
 * the CORS layer for the browser frontend.
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::backend::auth::rate_limit::FixedWindowLimiter;
use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup failure
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("invalid CORS origin: {origin:?}")]
    CorsOrigin { origin: String },
}

/// Create and configure the Axum application.
///
/// Unlike the domain-record side of the application, authentication cannot
/// degrade gracefully without its database, so connection and migration
/// failures abort startup.
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Connecting to database...");
    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .map_err(InitError::Connect)?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState {
        pool,
        tokens: TokenService::new(config.jwt_secret.clone(), config.token_ttl),
        limiter: Arc::new(FixedWindowLimiter::new(
            config.max_login_attempts,
            config.login_window,
        )),
        bcrypt_cost: config.bcrypt_cost,
        cookie_secure: config.cookie_secure,
    };

    let mut app = create_router(state);

    if let Some(origin) = &config.cors_origin {
        let origin_value = origin
            .parse::<HeaderValue>()
            .map_err(|_| InitError::CorsOrigin {
                origin: origin.clone(),
            })?;
        // Credentialed CORS: the cookie only flows for the configured
        // frontend origin, never for a wildcard.
        let cors = CorsLayer::new()
            .allow_origin(origin_value)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true);
        app = app.layer(cors);
        tracing::info!("CORS enabled for {origin}");
    }

    tracing::info!("Router configured");

    Ok(app)
}
