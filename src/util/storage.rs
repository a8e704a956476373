//! Durable session persistence in `localStorage`.
//!
//! One fixed key holds the JSON-serialized session. Reads and writes
//! require a browser environment; the encode/decode halves are pure so the
//! blob format stays testable off-wasm. Storage failures (quota, private
//! mode) degrade to an in-memory-only session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::Session;

/// The single `localStorage` key for the serialized session.
pub const SESSION_KEY: &str = "stockroom_session";

/// Read the persisted session, if any. Corrupt blobs read as no session.
pub fn read_session() -> Option<Session> {
    let storage = local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
    decode_session(&raw)
}

/// Persist the session under [`SESSION_KEY`].
pub fn write_session(session: &Session) {
    if let Some(storage) = local_storage() {
        if let Some(raw) = encode_session(session) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }
}

/// Remove the persisted entry entirely (logout).
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub(crate) fn encode_session(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

pub(crate) fn decode_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}
