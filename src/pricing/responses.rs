//! Response types for rental quotes.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::QuoteError;

/// A successful quote
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Formatted price, e.g. `"$150.00"`
    pub price: String,
    /// Price rounded to cents, `None` if the total was not a finite number
    pub amount: Option<Decimal>,
    /// Number of calendar days billed
    pub days: usize,
}

/// Serialized quote outcome.
///
/// Exactly one of `price` and `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteResponse {
    pub fn ok(price: impl Into<String>) -> Self {
        Self {
            success: true,
            price: Some(price.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            price: None,
            error: Some(error.into()),
        }
    }
}

impl From<Result<Quote, QuoteError>> for QuoteResponse {
    fn from(result: Result<Quote, QuoteError>) -> Self {
        match result {
            Ok(quote) => QuoteResponse::ok(quote.price),
            Err(err) => QuoteResponse::failed(err.to_string()),
        }
    }
}
