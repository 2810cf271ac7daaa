// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Guarantees shared by every pattern.

use recurcal_core::{
    DateRange, Expander, RecurrencePattern, RecurrenceRule, RuleDraft, WeekdaySet, expand,
};

use crate::common::{assert_sorted_within, d, range, weekdays};

fn sample_rules() -> Vec<RecurrenceRule> {
    let days = weekdays(&["Mon", "Thu", "Sat"]);
    vec![
        RecurrenceRule::daily(),
        RecurrenceRule::daily().with_interval(3),
        RecurrenceRule::weekly(days),
        RecurrenceRule::weekly(days).with_interval(4),
        RecurrenceRule::monthly_on(31),
        RecurrenceRule::monthly_on(10)
            .with_weekdays(days)
            .with_interval(5),
        RecurrenceRule::new(RecurrencePattern::Yearly, 1, days, Some(13)),
        RecurrenceRule::new(RecurrencePattern::Yearly, 3, WeekdaySet::EMPTY, Some(29)),
    ]
}

#[test]
fn output_is_sorted_unique_and_in_range() {
    let ranges = [
        range("2024-01-17", "2026-08-09"),
        range("2023-02-28", "2023-03-01"),
        DateRange::starting(d("2024-05-31")),
    ];
    for rule in sample_rules() {
        for range in &ranges {
            assert_sorted_within(&expand(&rule, range), range);
        }
    }
}

#[test]
fn start_after_end_is_empty() {
    let range = range("2024-06-01", "2024-05-31");
    for rule in sample_rules() {
        assert!(expand(&rule, &range).is_empty(), "{rule:?}");
    }
}

#[test]
fn expansion_is_idempotent() {
    let range = range("2024-01-01", "2027-12-31");
    for rule in sample_rules() {
        assert_eq!(expand(&rule, &range), expand(&rule, &range), "{rule:?}");
    }
}

#[test]
fn open_range_stops_at_default_horizon() {
    let range = DateRange::starting(d("2024-03-15"));
    let horizon = d("2034-12-31");
    for rule in sample_rules() {
        let out = expand(&rule, &range);
        let last = out.last().copied();
        assert!(last.is_some_and(|last| last <= horizon), "{rule:?}");
    }

    let out = expand(&RecurrenceRule::monthly_on(31), &range);
    assert_eq!(out.last(), Some(&horizon));
}

#[test]
fn configured_horizon_bounds_open_range() {
    let expander = Expander::new(1);
    let range = DateRange::starting(d("2024-05-01"));
    let out = expander.expand(&RecurrenceRule::daily(), &range);
    assert_eq!(out.last(), Some(&d("2025-12-31")));
}

#[test]
fn horizon_clamps_to_calendar_end() {
    let range = DateRange::starting(d("9998-06-01"));
    let out = expand(&RecurrenceRule::daily(), &range);
    assert_eq!(out.last(), Some(&d("9999-12-31")));

    let rule = RecurrenceRule::monthly_on(31).with_interval(7);
    let out = expand(&rule, &DateRange::starting(d("9999-01-01")));
    assert_eq!(out.last(), Some(&d("9999-08-31")));
}

#[test]
fn huge_interval_emits_first_date_only() {
    let range = range("2024-01-01", "2034-12-31");
    for pattern in [RecurrencePattern::Daily, RecurrencePattern::Monthly] {
        let rule = RecurrenceRule::new(pattern, i64::MAX, WeekdaySet::EMPTY, Some(1));
        let out = expand(&rule, &range);
        assert_eq!(out.as_slice(), &[d("2024-01-01")], "{pattern}");
    }
}

#[test]
fn draft_from_json_expands() {
    let json = r#"{"pattern": "weekly", "interval": 1, "weekdays": ["Sat", "Sun"]}"#;
    let draft: RuleDraft = serde_json::from_str(json).unwrap();
    let rule = RecurrenceRule::try_from(draft).unwrap();
    let out = expand(&rule, &range("2024-01-01", "2024-01-31"));
    assert_eq!(out.len(), 8);
}
