//! Networking: error taxonomy, HTTP layer with the global interceptors,
//! REST calls, and wire types.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
