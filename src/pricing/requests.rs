//! Request types for quoting a rental.

use chrono::NaiveDate;
use serde::Deserialize;

use super::calendar::{parse_date, years_between};

/// A calendar date, either already typed or as text still to be parsed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// The calendar date, or `None` when the text is not a recognizable date
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Date(date) => Some(*date),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// How long the driver has held a license
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LicenseYears {
    /// Years held, possibly fractional
    Years(f64),
    /// Years held as text, coerced to a number
    Text(String),
    /// Date the license was issued; tenure is counted up to the pickup date
    #[serde(skip)]
    IssuedOn(NaiveDate),
}

impl LicenseYears {
    /// Numeric tenure at `pickup`, or `None` when it cannot be read as a number.
    ///
    /// Whitespace-only text counts as zero years.
    pub fn resolve(&self, pickup: NaiveDate) -> Option<f64> {
        let years = match self {
            LicenseYears::Years(years) => *years,
            LicenseYears::Text(text) => parse_number(text)?,
            LicenseYears::IssuedOn(issued) => f64::from(years_between(*issued, pickup)),
        };

        (!years.is_nan()).then_some(years)
    }
}

/// Read numeric text the way web form values are coerced.
///
/// Decimal and exponent notation, unsigned `0x`/`0o`/`0b` integers and the
/// exact spelling `Infinity`. Other non-finite spellings such as `inf` or
/// `NaN` are rejected.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| text.strip_prefix(p)) {
            if !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<f64> for LicenseYears {
    fn from(years: f64) -> Self {
        LicenseYears::Years(years)
    }
}

impl From<u32> for LicenseYears {
    fn from(years: u32) -> Self {
        LicenseYears::Years(f64::from(years))
    }
}

impl From<&str> for LicenseYears {
    fn from(text: &str) -> Self {
        LicenseYears::Text(text.to_string())
    }
}

/// Request to quote a rental
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    pub pickup_date: DateInput,
    pub dropoff_date: DateInput,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    pub age: u32,
    #[serde(default)]
    pub license_years: Option<LicenseYears>,
}

impl QuoteRequest {
    /// Build a request for the given rental window and driver age.
    ///
    /// Locations default to empty, the vehicle type to none and the license
    /// tenure to missing.
    pub fn new(pickup_date: impl Into<DateInput>, dropoff_date: impl Into<DateInput>, age: u32) -> Self {
        Self {
            pickup_location: String::new(),
            dropoff_location: String::new(),
            pickup_date: pickup_date.into(),
            dropoff_date: dropoff_date.into(),
            vehicle_type: None,
            age,
            license_years: None,
        }
    }

    pub fn with_locations(mut self, pickup: impl Into<String>, dropoff: impl Into<String>) -> Self {
        self.pickup_location = pickup.into();
        self.dropoff_location = dropoff.into();
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn with_license_years(mut self, license_years: impl Into<LicenseYears>) -> Self {
        self.license_years = Some(license_years.into());
        self
    }
}
