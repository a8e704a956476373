//! HTTP layer with the two global interceptors.
//!
//! Request side: every outbound call gets `Authorization: Bearer <token>`
//! attached when a session token exists; tokenless requests go out
//! unauthenticated.
//!
//! Response side: a 401 from any endpoint clears the session and performs a
//! hard navigation to the login page before the error is handed back to the
//! caller. This is the single documented hook coupling the transport to the
//! session lifecycle, not hidden error handling. All other failures pass
//! through untouched.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config;
use crate::net::error::ApiError;
use crate::state::session;

/// `GET` a JSON body from `path` (relative to the configured base URL).
///
/// # Errors
///
/// See [`ApiError`]; a 401 additionally forces logout before returning.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorize(Request::get(&endpoint(path)?))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(intercept(resp)?).await
}

/// `POST` a JSON body to `path` and decode the JSON reply.
///
/// # Errors
///
/// See [`ApiError`]; a 401 additionally forces logout before returning.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorize(Request::post(&endpoint(path)?))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(intercept(resp)?).await
}

/// `PATCH` a JSON body to `path` and decode the JSON reply.
///
/// # Errors
///
/// See [`ApiError`]; a 401 additionally forces logout before returning.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorize(Request::patch(&endpoint(path)?))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(intercept(resp)?).await
}

fn endpoint(path: &str) -> Result<String, ApiError> {
    Ok(join_url(config::api_base_url()?, path))
}

/// Join base URL and path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Request interceptor: attach the bearer token when a session exists.
/// The token is read fresh from the store on every call.
fn authorize(req: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => req,
    }
}

/// Response interceptor: force logout on 401, map other non-success
/// statuses to [`ApiError::Status`].
fn intercept(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status == 401 {
        log::warn!("server rejected the session token; logging out");
        session::logout();
        redirect_to_login();
        return Err(ApiError::Status { status });
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status });
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Hard navigation, not a router transition: the whole document reloads on
/// the login page so no stale protected view survives the forced logout.
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
