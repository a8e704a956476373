//! Error taxonomy for the HTTP layer.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by [`crate::net::http`] and [`crate::net::api`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Transport-level failure: DNS, refused connection, aborted request.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status code.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// A request or response body did not match the expected shape.
    #[error("unexpected body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// True for a 401; the global interceptor has already forced logout.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True for a 400; on login this means rejected credentials.
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }
}
