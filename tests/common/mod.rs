//! Shared fixtures for integration tests.
//!
//! Builds the full application router against a fresh in-memory SQLite
//! database, plus small helpers for driving it request-by-request.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use nutriflow::backend::auth::{FixedWindowLimiter, TokenService};
use nutriflow::backend::routes::create_router;
use nutriflow::backend::server::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Token signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Minimum bcrypt cost, to keep the tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// App with the default token TTL (1h) and attempt limit (5).
pub async fn test_app() -> Router {
    test_app_with(Duration::from_secs(3600), 5).await
}

/// App with a custom token TTL and login attempt limit.
pub async fn test_app_with(token_ttl: Duration, max_attempts: u32) -> Router {
    // A single connection keeps every request on the same in-memory
    // database; `sqlite::memory:` is otherwise per-connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");

    let state = AppState {
        pool,
        tokens: TokenService::new(TEST_SECRET, token_ttl),
        limiter: Arc::new(FixedWindowLimiter::new(
            max_attempts,
            Duration::from_secs(60),
        )),
        bcrypt_cost: TEST_BCRYPT_COST,
        cookie_secure: false,
    };

    create_router(state)
}

/// Send one request through the router.
pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }

    let request = builder
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .expect("request");

    app.clone().oneshot(request).await.expect("response")
}

/// Read the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> Response {
    request(
        app,
        Method::POST,
        "/auth/register",
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
        None,
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> Response {
    request(
        app,
        Method::POST,
        "/auth/login",
        Some(serde_json::json!({ "email": email, "password": password })),
        None,
    )
    .await
}

pub async fn validate(app: &Router, cookie: Option<&str>) -> Response {
    request(app, Method::GET, "/auth/validate", None, cookie).await
}

pub async fn logout(app: &Router, cookie: Option<&str>) -> Response {
    request(app, Method::POST, "/auth/logout", None, cookie).await
}

/// Full `Set-Cookie` header from a response, if any.
pub fn set_cookie_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The `access_token=...` pair from a response, ready to send back as a
/// `Cookie` header.
pub fn session_cookie_pair(response: &Response) -> Option<String> {
    set_cookie_header(response)
        .map(|header| header.split(';').next().unwrap_or_default().to_string())
}

/// Register and log in, returning the session cookie pair.
pub async fn authenticated_cookie(app: &Router, email: &str, password: &str) -> String {
    let response = register(app, "Test User", email, password).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = login(app, email, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie_pair(&response).expect("login sets the session cookie")
}
