//! Pricing engine module for rental quotes.
//!
//! Validates a quote request, prices every rental day, applies whole-rental
//! adjustments and formats the total.

pub mod calculators;
pub mod calendar;
pub mod requests;
pub mod responses;
pub mod services;
pub mod validation;
pub mod vehicle;

// Re-export commonly used items
pub use calculators::{format_currency, round_money};
pub use calendar::{days_between_inclusive, is_high_season, is_weekend, years_between};
pub use requests::{DateInput, LicenseYears, QuoteRequest};
pub use responses::{Quote, QuoteResponse};
pub use services::{price, quote};
pub use vehicle::{normalize_car_type, VehicleCategory};
