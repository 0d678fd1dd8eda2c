//! Calendar-date helpers used by the pricing rules.
//!
//! All functions work on `NaiveDate`, so there is no time-of-day or timezone
//! component that could skip or repeat a day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

/// First high-season month (April)
pub const HIGH_SEASON_START_MONTH: u32 = 4;

/// Last high-season month (October)
pub const HIGH_SEASON_END_MONTH: u32 = 10;

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];
const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Every calendar date from `start` to `end`, both inclusive.
///
/// Empty when `start` is after `end`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rental_quote::pricing::days_between_inclusive;
///
/// let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
/// assert_eq!(days_between_inclusive(start, end).len(), 3);
/// assert!(days_between_inclusive(end, start).is_empty());
/// ```
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// April through October inclusive
pub fn is_high_season(date: NaiveDate) -> bool {
    (HIGH_SEASON_START_MONTH..=HIGH_SEASON_END_MONTH).contains(&date.month())
}

/// Whole years elapsed from `from` to `to`.
///
/// The anniversary day itself counts as a completed year.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Parse free-form date text into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, `Feb 3, 2025`,
/// `February 3, 2025`, RFC 3339 timestamps and naive timestamps with a `T` or
/// space separator, with or without seconds. Timestamps keep only their date
/// part.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|stamp| stamp.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== days_between_inclusive tests ====================

    #[test]
    fn test_days_between_inclusive_empty_when_reversed() {
        let days = days_between_inclusive(date(2025, 6, 10), date(2025, 6, 5));
        assert!(days.is_empty());
    }

    #[test]
    fn test_days_between_inclusive_single_day() {
        let days = days_between_inclusive(date(2025, 1, 6), date(2025, 1, 6));
        assert_eq!(days, vec![date(2025, 1, 6)]);
    }

    #[test]
    fn test_days_between_inclusive_length_and_bounds() {
        let start = date(2025, 1, 1);
        let end = date(2025, 1, 11);
        let days = days_between_inclusive(start, end);

        assert_eq!(days.len() as i64, (end - start).num_days() + 1);
        assert_eq!(days.first(), Some(&start));
        assert_eq!(days.last(), Some(&end));
    }

    #[test]
    fn test_days_between_inclusive_crosses_month_and_leap_day() {
        let days = days_between_inclusive(date(2024, 2, 27), date(2024, 3, 2));
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2),
            ]
        );
    }

    #[test]
    fn test_days_between_inclusive_across_dst_change() {
        // 2025-03-30 is a DST switch in much of Europe; calendar dates never skip
        let days = days_between_inclusive(date(2025, 3, 29), date(2025, 3, 31));
        assert_eq!(days.len(), 3);
    }

    // ==================== is_weekend / is_high_season tests ====================

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2025, 2, 8))); // Sat
        assert!(is_weekend(date(2025, 2, 9))); // Sun
        assert!(!is_weekend(date(2025, 2, 5))); // Wed
        assert!(!is_weekend(date(2025, 2, 7))); // Fri
    }

    #[test]
    fn test_is_high_season_boundaries() {
        assert!(is_high_season(date(2025, 5, 5)));
        assert!(!is_high_season(date(2025, 1, 5)));
        assert!(!is_high_season(date(2025, 3, 31)));
        assert!(is_high_season(date(2025, 4, 1)));
        assert!(is_high_season(date(2025, 10, 31)));
        assert!(!is_high_season(date(2025, 11, 1)));
    }

    // ==================== years_between tests ====================

    #[test]
    fn test_years_between_day_before_anniversary() {
        assert_eq!(years_between(date(2020, 6, 10), date(2021, 6, 9)), 0);
    }

    #[test]
    fn test_years_between_on_anniversary() {
        assert_eq!(years_between(date(2020, 6, 10), date(2021, 6, 10)), 1);
    }

    #[test]
    fn test_years_between_earlier_month() {
        assert_eq!(years_between(date(2020, 6, 10), date(2021, 5, 10)), 0);
    }

    #[test]
    fn test_years_between_many_years() {
        assert_eq!(years_between(date(2010, 1, 1), date(2025, 6, 1)), 15);
        assert_eq!(years_between(date(2024, 5, 1), date(2025, 5, 5)), 1);
    }

    #[test]
    fn test_years_between_from_leap_day() {
        assert_eq!(years_between(date(2020, 2, 29), date(2021, 2, 28)), 0);
        assert_eq!(years_between(date(2020, 2, 29), date(2021, 3, 1)), 1);
        assert_eq!(years_between(date(2020, 2, 29), date(2024, 2, 29)), 4);
    }

    // ==================== parse_date tests ====================

    #[test]
    fn test_parse_date_accepted_forms() {
        assert_eq!(parse_date("2025-02-03"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date(" 2025-02-03 "), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025/02/03"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03T10:30:00Z"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03T10:30:00+02:00"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03T10:30:00"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03T10:00"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03 10:00:00"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("2025-02-03 10:00"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("02/03/2025"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("12/31/2025"), Some(date(2025, 12, 31)));
        assert_eq!(parse_date("Feb 3, 2025"), Some(date(2025, 2, 3)));
        assert_eq!(parse_date("February 3, 2025"), Some(date(2025, 2, 3)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("invalid"), None);
        assert_eq!(parse_date("also invalid"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("13/01/2025"), None);
        assert_eq!(parse_date("2025-02-03T25:00"), None);
    }
}
