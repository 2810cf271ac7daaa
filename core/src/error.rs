// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Input that cannot be turned into a rule, range or display month.
///
/// Out-of-range numbers are never reported here: they are clamped or dropped
/// while normalizing. Only structurally malformed input is rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The recurrence pattern tag is not one of daily, weekly, monthly, yearly.
    #[error("Unknown pattern '{0}', expected daily, weekly, monthly or yearly")]
    UnknownPattern(String),

    /// A weekday tag could not be parsed.
    #[error("Unknown weekday '{0}', expected Sun, Mon, Tue, Wed, Thu, Fri or Sat")]
    UnknownWeekday(String),

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid {field} date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A display month could not be parsed as `YYYY-MM`.
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    /// A navigation delta could not be parsed.
    #[error("Invalid shift '{0}', expected e.g. +1m, -1y, next, prev")]
    InvalidShift(String),
}
