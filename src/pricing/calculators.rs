//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O.
//!
//! Adjustments are applied as binary floating point multipliers so quoted
//! totals are reproducible to the cent; only the final amount is converted to
//! `Decimal` for rounding.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::calendar::{is_high_season, is_weekend};
use super::validation::ValidatedRental;
use super::vehicle::VehicleCategory;

/// Weekend day surcharge (+5%)
pub const WEEKEND_MULTIPLIER: f64 = 1.05;

/// High season day surcharge (+15%)
pub const HIGH_SEASON_MULTIPLIER: f64 = 1.15;

/// Racer surcharge for young drivers on high season days (+50%)
pub const RACER_MULTIPLIER: f64 = 1.5;

/// Racer surcharge applies to drivers this age or younger
pub const RACER_SURCHARGE_MAX_AGE: u32 = 25;

/// Flat amount added per high season day for licenses under three years
pub const NOVICE_DAILY_SURCHARGE: f64 = 15.0;

/// Per-day novice surcharge applies below this tenure
pub const NOVICE_DAILY_MAX_YEARS: f64 = 3.0;

/// Whole-rental surcharge for licenses under two years (+30%)
pub const NOVICE_TOTAL_MULTIPLIER: f64 = 1.3;

/// Whole-rental novice surcharge applies below this tenure
pub const NOVICE_TOTAL_MAX_YEARS: f64 = 2.0;

/// Discount for long rentals entirely in low season (-10%)
pub const LONG_LOW_SEASON_MULTIPLIER: f64 = 0.9;

/// Long-rental discount applies to rentals longer than this many days
pub const LONG_RENTAL_MIN_DAYS: usize = 10;

/// Round to specified decimal places, with halves rounded away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_quote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(12.345), 2), dec!(12.35));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as dollars with exactly two decimals.
///
/// Rounding works on the exact binary value of `value`, so an amount that is
/// a hair under a half cent rounds down.
///
/// # Examples
/// ```
/// use rental_quote::pricing::format_currency;
///
/// assert_eq!(format_currency(12.0), "$12.00");
/// assert_eq!(format_currency(12.345), "$12.35");
/// ```
pub fn format_currency(value: f64) -> String {
    match to_money(value) {
        Some(amount) => format_money(amount),
        None => format!("${value:.2}"),
    }
}

/// Render a cent-rounded amount as dollars
pub fn format_money(amount: Decimal) -> String {
    format!("${amount}")
}

/// Exact decimal value of `value`, rounded to cents.
///
/// Anything that rounds to zero is an unsigned zero. `None` for NaN and
/// infinities.
pub fn to_money(value: f64) -> Option<Decimal> {
    let rounded = round_money(Decimal::from_f64_retain(value)?, 2);
    let mut amount = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    amount.rescale(2);
    Some(amount)
}

/// Price of a single rental day after all day-level adjustments.
///
/// Starts from the driver's age and never drops below it.
pub fn daily_price(
    day: NaiveDate,
    age: u32,
    category: VehicleCategory,
    license_years: f64,
) -> f64 {
    let base = f64::from(age);
    let high_season = is_high_season(day);
    let mut daily = base;

    if is_weekend(day) {
        daily *= WEEKEND_MULTIPLIER;
    }

    if high_season {
        daily *= HIGH_SEASON_MULTIPLIER;
    }

    // Racer surcharge never applies in low season
    if category == VehicleCategory::Racer && age <= RACER_SURCHARGE_MAX_AGE && high_season {
        daily *= RACER_MULTIPLIER;
    }

    if license_years < NOVICE_DAILY_MAX_YEARS && high_season {
        daily += NOVICE_DAILY_SURCHARGE;
    }

    daily.max(base)
}

/// Apply whole-rental adjustments to the summed per-day prices
pub fn apply_rental_adjustments(subtotal: f64, days: &[NaiveDate], license_years: f64) -> f64 {
    let mut total = subtotal;

    if license_years < NOVICE_TOTAL_MAX_YEARS {
        total *= NOVICE_TOTAL_MULTIPLIER;
    }

    let any_high_season = days.iter().copied().any(is_high_season);
    if days.len() > LONG_RENTAL_MIN_DAYS && !any_high_season {
        total *= LONG_LOW_SEASON_MULTIPLIER;
    }

    total
}

/// Total rental price before rounding
pub fn calculate_total(rental: &ValidatedRental) -> f64 {
    let subtotal: f64 = rental
        .days
        .iter()
        .map(|&day| {
            let daily = daily_price(day, rental.age, rental.category, rental.license_years);
            tracing::debug!(%day, daily, "Priced rental day");
            daily
        })
        .sum();

    tracing::debug!(subtotal, days = rental.days.len(), "Summed per-day prices");

    apply_rental_adjustments(subtotal, &rental.days, rental.license_years)
}
