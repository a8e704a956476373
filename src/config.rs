//! Startup configuration.
//!
//! The API base URL is baked in at compile time from the
//! `STOCKROOM_API_URL` environment variable (Trunk forwards the build
//! environment to `rustc`). The value is required: startup aborts before
//! mounting when it is missing or empty.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

const RAW_BASE_URL: Option<&str> = option_env!("STOCKROOM_API_URL");

/// Fatal configuration problems detected at startup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOCKROOM_API_URL was not set at build time")]
    MissingBaseUrl,
    #[error("STOCKROOM_API_URL is empty")]
    EmptyBaseUrl,
}

/// The validated API base URL, with trailing slashes trimmed.
///
/// # Errors
///
/// Returns a `ConfigError` when the base URL was not provided at build
/// time or trims down to nothing.
pub fn api_base_url() -> Result<&'static str, ConfigError> {
    validate_base_url(RAW_BASE_URL)
}

pub(crate) fn validate_base_url(raw: Option<&str>) -> Result<&str, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingBaseUrl)?;
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed)
}
