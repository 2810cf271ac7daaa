// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories.

use jiff::civil::Date;
use recurcal_core::{DateRange, RecurrenceRule, WeekdaySet};

/// Parses a `YYYY-MM-DD` literal.
///
/// # Panics
///
/// Panics if the literal is not a valid date.
pub fn d(s: &str) -> Date {
    s.parse().expect("test date literal should be valid")
}

/// An inclusive range between two `YYYY-MM-DD` literals.
pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::between(d(start), d(end))
}

/// A weekday set from short tags, e.g. `["Mon", "Wed"]`.
///
/// # Panics
///
/// Panics if a tag is not a weekday.
pub fn weekdays(tags: &[&str]) -> WeekdaySet {
    tags.iter()
        .map(|tag| tag.parse().expect("test weekday tag should be valid"))
        .collect()
}

/// A weekly rule on the given weekdays, every `interval` weeks.
pub fn weekly_every(interval: i64, tags: &[&str]) -> RecurrenceRule {
    RecurrenceRule::weekly(weekdays(tags)).with_interval(interval)
}
