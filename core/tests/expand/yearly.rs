// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Yearly pattern expansion.

use recurcal_core::{RecurrencePattern, RecurrenceRule, Weekday, WeekdaySet, expand};

use crate::common::{assert_dates, d, range};

fn yearly(weekdays: impl Into<WeekdaySet>, nth: Option<i64>) -> RecurrenceRule {
    RecurrenceRule::new(RecurrencePattern::Yearly, 1, weekdays.into(), nth)
}

#[test]
fn yearly_scans_every_month() {
    let rule = yearly(WeekdaySet::EMPTY, Some(29));
    let out = expand(&rule, &range("2024-01-01", "2024-12-31"));
    assert_eq!(out.len(), 12);
    assert!(out.contains(d("2024-02-29")));
}

#[test]
fn yearly_every_other_year() {
    let rule = yearly(WeekdaySet::EMPTY, Some(1)).with_interval(2);
    let out = expand(&rule, &range("2024-01-01", "2027-12-31"));
    assert_eq!(out.len(), 24);
    assert_eq!(out.first(), Some(&d("2024-01-01")));
    assert_eq!(out.last(), Some(&d("2026-12-01")));
    assert!(out.iter().all(|date| date.year() % 2 == 0));
}

#[test]
fn yearly_clipped_across_new_year() {
    let sundays = yearly([Weekday::Sunday], None);
    let out = expand(&sundays, &range("2024-12-20", "2025-01-10"));
    assert_dates(&out, &["2024-12-22", "2024-12-29", "2025-01-05"]);

    let every_other = yearly([Weekday::Sunday], None).with_interval(2);
    let out = expand(&every_other, &range("2024-12-20", "2025-01-10"));
    assert_dates(&out, &["2024-12-22", "2024-12-29"]);
}

#[test]
fn yearly_without_filters_is_empty() {
    let rule = yearly(WeekdaySet::EMPTY, None);
    let out = expand(&rule, &range("2024-01-01", "2030-12-31"));
    assert!(out.is_empty());
}
