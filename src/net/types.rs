//! Wire types for the product-management REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A product row as returned by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a `POST /login` success response.
///
/// `accessToken` is optional on the wire: an HTTP 200 without a usable
/// token is still treated as a login failure by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// The bearer token, if present and non-empty.
    pub fn token(self) -> Option<String> {
        self.access_token.filter(|token| !token.is_empty())
    }
}

/// Body for `POST /api/products`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

/// Body for `PATCH /api/products/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StockPatch {
    pub stock: u32,
}
