use chrono::NaiveDate;

use crate::errors::{BookingError, BookingResult};

/// Format accepted for booking dates and used for their canonical form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Only the exact ten-character shape is accepted: a four-digit year, two-digit
/// month and day, `-` separators, no sign and no surrounding whitespace.
/// Malformed input and impossible dates (month 13, February 30th) are both
/// reported as [`BookingError::InvalidDateFormat`].
pub fn parse_date(input: &str) -> BookingResult<NaiveDate> {
    if !has_date_shape(input) {
        return Err(BookingError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| BookingError::InvalidDateFormat)
}

/// Renders a date in its canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
