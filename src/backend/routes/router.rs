//! Main router creation.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the application router with all routes and middleware.
///
/// CORS is deployment configuration and is layered on by server init; the
/// router itself only knows about routes and request tracing.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new();
    let router = configure_auth_routes(router);

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
