//! Page components, one per route.

pub mod login;
pub mod products;
