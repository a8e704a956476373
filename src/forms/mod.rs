//! Client-side form validation.
//!
//! Invalid input never reaches the network: each form validates its raw
//! string fields here and only a fully-coerced value is handed to the API
//! layer. Messages are per-field so pages can render them inline.

pub mod login;
pub mod product;
