// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekly pattern expansion.
//!
//! Week cycles are counted in elapsed days from the range start, so the skip
//! after each cycle never depends on how many weekdays are selected.

use recurcal_core::{RecurrenceRule, Weekday, WeekdaySet, expand};

use crate::common::{assert_dates, range, weekly_every};

#[test]
fn weekly_selected_weekdays() {
    let rule = weekly_every(1, &["Mon", "Wed"]);
    let out = expand(&rule, &range("2024-01-01", "2024-01-14"));
    assert_dates(
        &out,
        &["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10"],
    );
}

#[test]
fn weekly_every_other_week() {
    let rule = weekly_every(2, &["Mon"]);
    let out = expand(&rule, &range("2024-01-01", "2024-01-31"));
    assert_dates(&out, &["2024-01-01", "2024-01-15", "2024-01-29"]);
}

#[test]
fn weekly_cycle_counts_from_range_start() {
    // 2024-01-03 is a Wednesday: cycles cover Jan 3-9, Jan 17-23, Jan 31-Feb 6, ...
    let rule = weekly_every(2, &["Mon"]);
    let out = expand(&rule, &range("2024-01-03", "2024-02-29"));
    assert_dates(
        &out,
        &["2024-01-08", "2024-01-22", "2024-02-05", "2024-02-19"],
    );
}

#[test]
fn weekly_skip_is_independent_of_weekday_count() {
    let range = range("2024-01-03", "2024-02-29");
    let many = expand(&weekly_every(2, &["Mon", "Wed", "Fri"]), &range);
    assert_eq!(many.len(), 13);

    // Every selected day lands exactly where a single-day rule would put it.
    for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday] {
        let single = expand(&RecurrenceRule::weekly([day]).with_interval(2), &range);
        let filtered: Vec<_> = many
            .iter()
            .copied()
            .filter(|date| Weekday::from(date.weekday()) == day)
            .collect();
        assert_eq!(single.as_slice(), filtered.as_slice(), "{day}");
    }
}

#[test]
fn weekly_all_days_every_third_week() {
    let rule = RecurrenceRule::weekly(Weekday::ALL).with_interval(3);
    let out = expand(&rule, &range("2024-01-01", "2024-03-31"));
    assert_eq!(out.len(), 35);
    assert!(out.contains(jiff::civil::date(2024, 1, 7)));
    assert!(!out.contains(jiff::civil::date(2024, 1, 8)));
    assert!(out.contains(jiff::civil::date(2024, 1, 22)));
}

#[test]
fn weekly_without_weekdays_is_empty() {
    for interval in [1, 2, 5] {
        let rule = RecurrenceRule::weekly(WeekdaySet::EMPTY).with_interval(interval);
        let out = expand(&rule, &range("2024-01-01", "2024-12-31"));
        assert!(out.is_empty(), "interval {interval}");
    }
}

#[test]
fn weekly_ignores_nth_day_of_month() {
    let with_nth = weekly_every(1, &["Tue"]).with_nth_day_of_month(Some(15));
    let range = range("2024-01-01", "2024-01-31");
    let plain = weekly_every(1, &["Tue"]);
    assert_eq!(expand(&with_nth, &range), expand(&plain, &range));
}
