//! Client session store.
//!
//! The single source of truth for "who is logged in" on the client. The
//! store starts in a loading state, resolves it by asking the server to
//! validate the session cookie, and from then on only its own operations
//! mutate the state:
//!
//! - `revalidate` re-runs validation (e.g. after a login, or on focus)
//! - `logout` ends the session locally no matter what the server says
//!
//! A 401 from validate is the normal logged-out case and leaves `error`
//! empty. Network, server and unknown failures populate `error` so the UI
//! can warn without pretending to know the authentication answer; no user
//! is ever fabricated from a failed call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::client::api::AuthApi;
use crate::client::error::{AuthError, AuthErrorKind};
use crate::shared::IdentityClaims;

/// Renderable view of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The validated identity, when the server confirmed one
    pub user: Option<IdentityClaims>,
    /// True while a validate or logout call is in flight
    pub is_loading: bool,
    /// Last surfaced failure; never set for plain 401s
    pub error: Option<AuthError>,
}

impl SessionSnapshot {
    /// Derived, never stored: `user` is the only authentication source.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Session state machine over the auth API.
pub struct SessionStore {
    api: AuthApi,
    state: Mutex<SessionSnapshot>,
    // Monotonic id per state-changing call. A call that settles after a
    // newer call has started discards its result, so stale responses can
    // never overwrite a more recent outcome.
    generation: AtomicU64,
}

impl SessionStore {
    /// Create a store in its initial loading state.
    pub fn new(api: AuthApi) -> Self {
        Self {
            api,
            state: Mutex::new(SessionSnapshot {
                user: None,
                is_loading: true,
                error: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Create the store and run the initial validation.
    pub async fn boot(api: AuthApi) -> Self {
        let store = Self::new(api);
        store.revalidate().await;
        store
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    /// Re-run validation against the server.
    ///
    /// Safe to trigger concurrently; the call that started last wins.
    pub async fn revalidate(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.api.validate().await;

        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer revalidate or a logout superseded this call; whoever
            // did will settle the loading flag.
            return;
        }
        state.is_loading = false;

        match result {
            Ok(claims) => {
                state.user = Some(claims);
                state.error = None;
            }
            Err(err) if err.kind == AuthErrorKind::Unauthorized => {
                // Expected for logged-out visitors, not an error condition.
                state.user = None;
                state.error = None;
            }
            Err(err) => {
                state.user = None;
                state.error = Some(err);
            }
        }
    }

    /// End the session.
    ///
    /// The server call clears the cookie; whatever it returns, local state
    /// always ends unauthenticated - the user said leave.
    pub async fn logout(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.is_loading = true;
            state.error = None;
        }

        if let Err(err) = self.api.logout().await {
            tracing::warn!("Logout request failed: {err}");
        }

        // Invalidate any in-flight revalidation so it cannot resurrect the
        // session after the user chose to leave.
        self.generation.fetch_add(1, Ordering::SeqCst);

        let mut state = self.state.lock().unwrap();
        state.user = None;
        state.error = None;
        state.is_loading = false;
    }
}
