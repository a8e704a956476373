//! # stockroom
//!
//! Leptos + WASM single-page application for authenticated product
//! management against a remote REST API.
//!
//! The crate contains a login page, a token-gated products page (listing,
//! creation, inline stock editing), a persisted session store, and an HTTP
//! layer that injects the bearer token on the way out and forces logout on
//! a 401 on the way back. The product list is never patched locally: every
//! successful write is followed by a full refetch.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
