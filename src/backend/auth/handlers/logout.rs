//! Logout handler.
//!
//! POST /auth/logout: clears the session cookie and always returns 200,
//! whether or not a session existed. The clearing cookie carries the same
//! attributes as the one set at login; browsers will not drop it otherwise.

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookie;
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

/// Logout handler; cannot fail from the caller's perspective.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(cookie::clear_session_cookie(state.cookie_secure));

    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
