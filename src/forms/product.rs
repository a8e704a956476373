//! Product create-form and stock-edit validation.
//!
//! The create form coerces its raw string inputs: name must be non-empty,
//! price a positive number, stock a non-negative whole number. The same
//! stock rule backs the inline editor via [`parse_stock`].

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::net::types::NewProduct;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_POSITIVE: &str = "Price must be a positive number";
pub const STOCK_NON_NEGATIVE: &str = "Stock must be a whole number, zero or more";

/// Raw create-form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
}

/// Per-field messages for a rejected draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraftErrors {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

impl ProductDraft {
    /// Coerce and validate the draft into a create-request body.
    ///
    /// # Errors
    ///
    /// Field-level messages for every violated rule; nothing is submitted
    /// while any field fails.
    pub fn validate(&self) -> Result<NewProduct, ProductDraftErrors> {
        let mut errors = ProductDraftErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some(NAME_REQUIRED.to_owned());
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price > 0.0 && price.is_finite() => Some(price),
            _ => {
                errors.price = Some(PRICE_POSITIVE.to_owned());
                None
            }
        };

        let stock = match parse_stock(&self.stock) {
            Some(stock) => Some(stock),
            None => {
                errors.stock = Some(STOCK_NON_NEGATIVE.to_owned());
                None
            }
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.name.is_none() => Ok(NewProduct {
                name: name.to_owned(),
                price,
                stock,
            }),
            _ => Err(errors),
        }
    }
}

/// Parse a stock value: a non-negative whole number, nothing else.
/// Rejects empty input, fractions, negatives, and non-numeric text.
pub fn parse_stock(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}
