//! REST calls for the product-management API.
//!
//! Thin wrappers over [`crate::net::http`]. Create and patch responses are
//! discarded on purpose: the pages re-fetch the full list after every write
//! instead of merging server echoes locally.

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{LoginRequest, LoginResponse, NewProduct, Product, StockPatch};

pub(crate) const LOGIN_PATH: &str = "/login";
pub(crate) const PRODUCTS_PATH: &str = "/api/products";

/// `POST /login`. A 400 status means the credentials were rejected.
///
/// # Errors
///
/// Propagates [`ApiError`] from the transport.
pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    http::post_json(LOGIN_PATH, credentials).await
}

/// `GET /api/products` — the full current list.
///
/// # Errors
///
/// Propagates [`ApiError`] from the transport.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    http::get_json(PRODUCTS_PATH).await
}

/// `POST /api/products`. The created record is discarded; callers refetch.
///
/// # Errors
///
/// Propagates [`ApiError`] from the transport.
pub async fn create_product(product: &NewProduct) -> Result<(), ApiError> {
    http::post_json::<_, serde_json::Value>(PRODUCTS_PATH, product)
        .await
        .map(|_| ())
}

/// `PATCH /api/products/{id}` with the new stock level. The updated record
/// is discarded; callers refetch.
///
/// # Errors
///
/// Propagates [`ApiError`] from the transport.
pub async fn update_stock(id: i64, stock: u32) -> Result<(), ApiError> {
    let path = format!("{PRODUCTS_PATH}/{id}");
    http::patch_json::<_, serde_json::Value>(&path, &StockPatch { stock })
        .await
        .map(|_| ())
}
