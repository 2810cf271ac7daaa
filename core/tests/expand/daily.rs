// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Daily pattern expansion.

use recurcal_core::{DateRange, RecurrenceRule, expand};

use crate::common::{assert_dates, d, range};

#[test]
fn daily_every_day() {
    let out = expand(&RecurrenceRule::daily(), &range("2024-01-01", "2024-01-05"));
    assert_dates(
        &out,
        &[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ],
    );
}

#[test]
fn daily_every_other_day() {
    let rule = RecurrenceRule::daily().with_interval(2);
    let out = expand(&rule, &range("2024-01-01", "2024-01-10"));
    assert_dates(
        &out,
        &[
            "2024-01-01",
            "2024-01-03",
            "2024-01-05",
            "2024-01-07",
            "2024-01-09",
        ],
    );
}

#[test]
fn daily_non_positive_interval_means_every_day() {
    let every_day = expand(&RecurrenceRule::daily(), &range("2024-01-01", "2024-01-31"));
    for interval in [0, -3] {
        let rule = RecurrenceRule::daily().with_interval(interval);
        let out = expand(&rule, &range("2024-01-01", "2024-01-31"));
        assert_eq!(out, every_day, "interval {interval}");
    }
}

#[test]
fn daily_crosses_leap_day() {
    let out = expand(&RecurrenceRule::daily(), &range("2024-02-28", "2024-03-01"));
    assert_dates(&out, &["2024-02-28", "2024-02-29", "2024-03-01"]);
}

#[test]
fn daily_long_interval_crosses_month_ends() {
    let rule = RecurrenceRule::daily().with_interval(30);
    let out = expand(&rule, &range("2024-01-01", "2024-04-30"));
    assert_dates(
        &out,
        &[
            "2024-01-01",
            "2024-01-31",
            "2024-03-01",
            "2024-03-31",
            "2024-04-30",
        ],
    );
}

#[test]
fn daily_single_day_range() {
    let out = expand(&RecurrenceRule::daily(), &range("2024-07-04", "2024-07-04"));
    assert_dates(&out, &["2024-07-04"]);
}

#[test]
fn daily_open_range_runs_to_horizon() {
    let range = DateRange::starting(d("2024-06-01"));
    let out = expand(&RecurrenceRule::daily(), &range);
    assert_eq!(out.first(), Some(&d("2024-06-01")));
    assert_eq!(out.last(), Some(&d("2034-12-31")));
    assert_eq!(out.len(), 3866);
}

#[test]
fn daily_interval_larger_than_range() {
    let rule = RecurrenceRule::daily().with_interval(1000);
    let out = expand(&rule, &range("2024-01-01", "2024-12-31"));
    assert_dates(&out, &["2024-01-01"]);
}
