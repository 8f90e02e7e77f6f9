//! Authentication route table.

use axum::Router;

use crate::backend::auth::{login, logout, register, validate};
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// All four endpoints are public; `validate` does its own cookie check
/// rather than sitting behind middleware, since it is the only protected
/// operation in this surface.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .route("/auth/validate", axum::routing::get(validate))
        .route("/auth/logout", axum::routing::post(logout))
}
