//! Error handling for the quoting engine

/// Reasons a quote request is rejected.
///
/// The display text of each variant is the exact message returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Invalid dates")]
    InvalidDates,

    #[error("Driver too young - cannot quote the price")]
    DriverTooYoung,

    #[error("Drivers 21 y/o or less can only rent Compact vehicles")]
    RestrictedToCompact,

    #[error("Invalid rental period")]
    InvalidRentalPeriod,

    #[error("Driver license years required")]
    LicenseYearsRequired,

    #[error("Driver must have a license for at least 1 year")]
    LicenseTooNew,
}

impl QuoteError {
    /// Stable identifier for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::InvalidDates => "invalid_dates",
            QuoteError::DriverTooYoung => "driver_too_young",
            QuoteError::RestrictedToCompact => "restricted_to_compact",
            QuoteError::InvalidRentalPeriod => "invalid_rental_period",
            QuoteError::LicenseYearsRequired => "license_years_required",
            QuoteError::LicenseTooNew => "license_too_new",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_verbatim() {
        assert_eq!(QuoteError::InvalidDates.to_string(), "Invalid dates");
        assert_eq!(
            QuoteError::DriverTooYoung.to_string(),
            "Driver too young - cannot quote the price"
        );
        assert_eq!(
            QuoteError::RestrictedToCompact.to_string(),
            "Drivers 21 y/o or less can only rent Compact vehicles"
        );
        assert_eq!(QuoteError::InvalidRentalPeriod.to_string(), "Invalid rental period");
        assert_eq!(
            QuoteError::LicenseYearsRequired.to_string(),
            "Driver license years required"
        );
        assert_eq!(
            QuoteError::LicenseTooNew.to_string(),
            "Driver must have a license for at least 1 year"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(QuoteError::LicenseTooNew.kind(), "license_too_new");
        assert_eq!(QuoteError::InvalidDates.kind(), "invalid_dates");
    }
}
