//! Eligibility checks run before any pricing math.
//!
//! Checks run in a fixed order and the first failure wins.

use chrono::NaiveDate;

use crate::error::{QuoteError, Result};

use super::calendar::days_between_inclusive;
use super::requests::QuoteRequest;
use super::vehicle::{normalize_car_type, VehicleCategory};

/// Youngest driver that can be quoted
pub const MIN_DRIVER_AGE: u32 = 18;

/// Drivers this age or younger are limited to compact vehicles
pub const COMPACT_ONLY_MAX_AGE: u32 = 21;

/// Minimum years a license must have been held
pub const MIN_LICENSE_YEARS: f64 = 1.0;

/// A request that passed every eligibility check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRental {
    pub days: Vec<NaiveDate>,
    pub category: VehicleCategory,
    pub age: u32,
    pub license_years: f64,
}

/// Validate a quote request.
///
/// Order: dates parse, minimum age, compact-only age, non-empty rental
/// period, license tenure present, minimum license tenure.
pub fn validate(request: &QuoteRequest) -> Result<ValidatedRental> {
    let category = normalize_car_type(request.vehicle_type.as_deref());
    if !category.is_known() && request.vehicle_type.is_some() {
        tracing::debug!(
            vehicle_type = ?request.vehicle_type,
            "Unrecognized vehicle type, treating as Unknown"
        );
    }

    let (Some(pickup), Some(dropoff)) = (request.pickup_date.resolve(), request.dropoff_date.resolve())
    else {
        return Err(QuoteError::InvalidDates);
    };

    if request.age < MIN_DRIVER_AGE {
        return Err(QuoteError::DriverTooYoung);
    }

    if request.age <= COMPACT_ONLY_MAX_AGE && category != VehicleCategory::Compact {
        return Err(QuoteError::RestrictedToCompact);
    }

    let days = days_between_inclusive(pickup, dropoff);
    if days.is_empty() {
        return Err(QuoteError::InvalidRentalPeriod);
    }

    let license_years = request
        .license_years
        .as_ref()
        .and_then(|held| held.resolve(pickup))
        .ok_or(QuoteError::LicenseYearsRequired)?;

    if license_years < MIN_LICENSE_YEARS {
        return Err(QuoteError::LicenseTooNew);
    }

    Ok(ValidatedRental {
        days,
        category,
        age: request.age,
        license_years,
    })
}
