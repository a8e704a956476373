//! The session store: one nullable bearer token, durable across reloads.
//!
//! Every mutation is mirrored to `localStorage` so a page reload keeps the
//! user signed in. No token shape validation and no client-side expiry:
//! an expired token is only discovered when the server answers 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::storage;

/// Client-held authentication state for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

thread_local! {
    static SESSION: RwSignal<Session> = RwSignal::new(storage::read_session().unwrap_or_default());
}

/// Handle to the process-wide session signal.
///
/// The route guard and pages read it reactively; writers go through
/// [`set_token`] and [`logout`] so persistence stays in sync.
pub fn use_session() -> RwSignal<Session> {
    SESSION.with(|signal| *signal)
}

/// The current token without subscribing. The HTTP layer calls this on
/// every outbound request so it always sees a fresh value.
pub fn token() -> Option<String> {
    use_session().get_untracked().token
}

/// Store a token from a successful login and persist it.
pub fn set_token(token: String) {
    let session = Session { token: Some(token) };
    storage::write_session(&session);
    use_session().set(session);
}

/// Clear the token and remove its persisted entry. No network call.
pub fn logout() {
    storage::clear_session();
    use_session().set(Session::default());
}
