//! Quote entry points.
//!
//! Validation, pricing and formatting composed into a single call. Nothing
//! here keeps state between calls.

use crate::error::Result;

use super::calculators::{calculate_total, format_currency, format_money, to_money};
use super::requests::{DateInput, LicenseYears, QuoteRequest};
use super::responses::{Quote, QuoteResponse};
use super::validation::validate;

/// Quote a rental request.
///
/// Returns the first failed eligibility check as the error.
pub fn quote(request: &QuoteRequest) -> Result<Quote> {
    let rental = match validate(request) {
        Ok(rental) => rental,
        Err(err) => {
            tracing::warn!(reason = err.kind(), age = request.age, "Quote rejected: {}", err);
            return Err(err);
        }
    };

    let total = calculate_total(&rental);
    let amount = to_money(total);
    let price = match amount {
        Some(amount) => format_money(amount),
        None => format_currency(total),
    };

    tracing::info!(
        category = %rental.category,
        days = rental.days.len(),
        price = %price,
        "Quoted rental"
    );

    Ok(Quote {
        price,
        amount,
        days: rental.days.len(),
    })
}

/// Quote a rental from its individual parameters.
///
/// Locations are carried for the caller's benefit only and never affect the
/// price. Always returns a response, never an error.
///
/// # Examples
/// ```
/// use rental_quote::pricing::{price, LicenseYears, QuoteResponse};
///
/// let years = Some(LicenseYears::Years(15.0));
/// let res = price("A", "B", "2025-02-03", "2025-02-05", Some("Compact"), 50, years);
/// assert_eq!(res, QuoteResponse::ok("$150.00"));
/// ```
pub fn price(
    pickup_location: &str,
    dropoff_location: &str,
    pickup_date: impl Into<DateInput>,
    dropoff_date: impl Into<DateInput>,
    vehicle_type: Option<&str>,
    age: u32,
    license_years: Option<LicenseYears>,
) -> QuoteResponse {
    let request = QuoteRequest {
        pickup_location: pickup_location.to_string(),
        dropoff_location: dropoff_location.to_string(),
        pickup_date: pickup_date.into(),
        dropoff_date: dropoff_date.into(),
        vehicle_type: vehicle_type.map(str::to_string),
        age,
        license_years,
    };

    quote(&request).into()
}
