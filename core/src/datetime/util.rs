// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Span;
use jiff::civil::Date;

use crate::ValidationError;

/// The date `n` days after `date`, or `None` past the supported calendar range.
pub fn add_days(date: Date, n: i64) -> Option<Date> {
    let span = Span::new().try_days(n).ok()?;
    date.checked_add(span).ok()
}

/// The date `n` months after `date`, or `None` past the supported calendar range.
///
/// The day is clamped to the end of the target month, e.g. Jan 31 + 1 month is
/// the last day of February.
pub fn add_months(date: Date, n: i64) -> Option<Date> {
    let span = Span::new().try_months(n).ok()?;
    date.checked_add(span).ok()
}

/// The date `n` years after `date`, or `None` past the supported calendar range.
///
/// Feb 29 maps to Feb 28 in non-leap years.
pub fn add_years(date: Date, n: i64) -> Option<Date> {
    let span = Span::new().try_years(n).ok()?;
    date.checked_add(span).ok()
}

/// Parses a `YYYY-MM-DD` date, naming `field` in the error.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
}
