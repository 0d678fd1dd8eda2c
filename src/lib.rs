//! Vehicle rental price quoting.
//!
//! A quote is a pure function of the request: no I/O and no shared state.

pub mod config;
pub mod error;
pub mod pricing;

pub use error::QuoteError;
pub use pricing::{price, quote, Quote, QuoteRequest, QuoteResponse};
