// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Monthly pattern expansion.

use recurcal_core::{RecurrenceRule, Weekday, WeekdaySet, expand};

use crate::common::{assert_dates, range};

#[test]
fn monthly_nth_day() {
    let rule = RecurrenceRule::monthly_on(15);
    let out = expand(&rule, &range("2024-01-01", "2024-03-31"));
    assert_dates(&out, &["2024-01-15", "2024-02-15", "2024-03-15"]);
}

#[test]
fn monthly_day_matching_both_filters_is_emitted_once() {
    // 2024-03-15 is a Friday
    let rule = RecurrenceRule::monthly_on(15).with_weekdays([Weekday::Friday]);
    let out = expand(&rule, &range("2024-03-01", "2024-03-31"));
    assert_dates(
        &out,
        &[
            "2024-03-01",
            "2024-03-08",
            "2024-03-15",
            "2024-03-22",
            "2024-03-29",
        ],
    );
}

#[test]
fn monthly_weekdays_or_nth_day() {
    // 2024-01-15 is a Monday, Saturdays are 6, 13, 20, 27
    let rule = RecurrenceRule::monthly_on(15).with_weekdays([Weekday::Saturday]);
    let out = expand(&rule, &range("2024-01-01", "2024-01-31"));
    assert_dates(
        &out,
        &[
            "2024-01-06",
            "2024-01-13",
            "2024-01-15",
            "2024-01-20",
            "2024-01-27",
        ],
    );
}

#[test]
fn monthly_nth_day_missing_from_short_months() {
    let rule = RecurrenceRule::monthly_on(31);
    let out = expand(&rule, &range("2024-01-01", "2024-12-31"));
    let months: Vec<_> = out.iter().map(|date| date.month()).collect();
    assert_eq!(months, vec![1, 3, 5, 7, 8, 10, 12]);
}

#[test]
fn monthly_interval_from_the_31st() {
    let rule = RecurrenceRule::monthly_on(31).with_interval(2);
    let out = expand(&rule, &range("2024-01-31", "2024-12-31"));
    // Jan, Mar, May, Jul, Sep, Nov are scanned; Sep and Nov have no 31st.
    assert_dates(
        &out,
        &["2024-01-31", "2024-03-31", "2024-05-31", "2024-07-31"],
    );
}

#[test]
fn monthly_does_not_emit_before_start() {
    let rule = RecurrenceRule::monthly_on(15);
    let out = expand(&rule, &range("2024-01-20", "2024-03-31"));
    assert_dates(&out, &["2024-02-15", "2024-03-15"]);
}

#[test]
fn monthly_every_third_month() {
    let rule = RecurrenceRule::monthly_on(1).with_interval(3);
    let out = expand(&rule, &range("2024-02-10", "2024-12-31"));
    assert_dates(&out, &["2024-05-01", "2024-08-01", "2024-11-01"]);
}

#[test]
fn monthly_without_filters_is_empty() {
    let rule = RecurrenceRule::monthly_on(0).with_weekdays(WeekdaySet::EMPTY);
    assert_eq!(rule.nth_day_of_month(), None);
    let out = expand(&rule, &range("2024-01-01", "2024-12-31"));
    assert!(out.is_empty());
}
