//! # Dates Module
//!
//! ISO 8601 calendar dates and the weekend-rate check.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{BillingResult, ValidationError};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date.
///
/// ## Rules
/// - Exactly 10 characters: 4-digit year, 2-digit month, 2-digit day
/// - Must be a real calendar date (`2023-02-29` is rejected)
///
/// ## Example
/// ```rust
/// use billing_core::dates::parse_iso_date;
/// use chrono::Datelike;
///
/// let date = parse_iso_date("2024-03-20").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 20));
/// assert!(parse_iso_date("invalid-date").is_err());
/// ```
///
/// ## Errors
/// Invalid argument when the text does not have the `YYYY-MM-DD` shape or
/// names a date that does not exist.
pub fn parse_iso_date(text: &str) -> BillingResult<NaiveDate> {
    let invalid = |reason: String| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason,
    };

    if !has_iso_date_shape(text) {
        return Err(invalid(format!("expected YYYY-MM-DD, got '{}'", text)).into());
    }

    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT)
        .map_err(|e| invalid(format!("'{}': {}", text, e)).into())
}

/// `true` for `dddd-dd-dd`, ASCII digits only.
fn has_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Whether a date falls on Saturday or Sunday.
pub fn is_weekend_rate(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
