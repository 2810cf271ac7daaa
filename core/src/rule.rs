// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod pattern;
mod weekday;

use std::num::NonZeroU32;

pub use pattern::RecurrencePattern;
pub use weekday::{Weekday, WeekdaySet};

use crate::ValidationError;

/// The smallest valid nth day of month.
pub const NTH_DAY_MIN: i64 = 1;

/// The largest valid nth day of month.
pub const NTH_DAY_MAX: i64 = 31;

/// A normalized recurrence rule.
///
/// Rules are rebuilt from input on every edit, so they are immutable once
/// constructed. Every constructor normalizes the numeric fields, so
/// `interval() >= 1` and `nth_day_of_month()` lies in `1..=31` when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RecurrenceRule {
    pattern: RecurrencePattern,
    interval: NonZeroU32,
    weekdays: WeekdaySet,
    nth_day_of_month: Option<u8>,
}

impl RecurrenceRule {
    /// Creates a rule, clamping out-of-range numbers instead of rejecting them.
    ///
    /// - `interval` below 1 becomes 1, above `u32::MAX` becomes `u32::MAX`;
    /// - `nth_day_of_month` outside `1..=31` is dropped.
    pub fn new(
        pattern: RecurrencePattern,
        interval: i64,
        weekdays: WeekdaySet,
        nth_day_of_month: Option<i64>,
    ) -> Self {
        Self {
            pattern,
            interval: normalize_interval(interval),
            weekdays,
            nth_day_of_month: nth_day_of_month.and_then(normalize_nth_day),
        }
    }

    /// Every day, starting from the range start.
    pub fn daily() -> Self {
        Self::new(RecurrencePattern::Daily, 1, WeekdaySet::EMPTY, None)
    }

    /// The given weekdays of every week.
    pub fn weekly(weekdays: impl Into<WeekdaySet>) -> Self {
        Self::new(RecurrencePattern::Weekly, 1, weekdays.into(), None)
    }

    /// The given day of every month.
    pub fn monthly_on(day: i64) -> Self {
        Self::new(RecurrencePattern::Monthly, 1, WeekdaySet::EMPTY, Some(day))
    }

    /// Returns a copy with another pattern.
    pub fn with_pattern(mut self, pattern: RecurrencePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Returns a copy with another interval, normalized like [`Self::new`].
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = normalize_interval(interval);
        self
    }

    /// Returns a copy with another weekday filter.
    pub fn with_weekdays(mut self, weekdays: impl Into<WeekdaySet>) -> Self {
        self.weekdays = weekdays.into();
        self
    }

    /// Returns a copy with another nth day of month, normalized like [`Self::new`].
    pub fn with_nth_day_of_month(mut self, day: Option<i64>) -> Self {
        self.nth_day_of_month = day.and_then(normalize_nth_day);
        self
    }

    /// The repeat unit.
    pub fn pattern(&self) -> RecurrencePattern {
        self.pattern
    }

    /// The multiplier on the repeat unit, always at least 1.
    pub fn interval(&self) -> NonZeroU32 {
        self.interval
    }

    /// The weekday filter, empty means no weekday matches.
    pub fn weekdays(&self) -> WeekdaySet {
        self.weekdays
    }

    /// The fixed day of month, if any.
    pub fn nth_day_of_month(&self) -> Option<u8> {
        self.nth_day_of_month
    }

    /// Whether the day matches the monthly/yearly filter: its weekday is
    /// selected, or its day of month equals the nth day.
    pub(crate) fn matches_day(&self, date: jiff::civil::Date) -> bool {
        self.weekdays.contains(date.weekday().into())
            || self
                .nth_day_of_month
                .is_some_and(|nth| i64::from(date.day()) == i64::from(nth))
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::daily()
    }
}

/// Raw recurrence input as typed into a form, before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RuleDraft {
    /// The pattern tag, e.g. `weekly`. Empty means daily.
    #[serde(default)]
    pub pattern: String,

    /// The interval, if any was entered.
    #[serde(default)]
    pub interval: Option<i64>,

    /// Weekday tags, e.g. `["Mon", "Wed"]`.
    #[serde(default)]
    pub weekdays: Vec<String>,

    /// The nth day of month, if any was entered.
    #[serde(default)]
    pub nth_day_of_month: Option<i64>,
}

impl TryFrom<&RuleDraft> for RecurrenceRule {
    type Error = ValidationError;

    fn try_from(draft: &RuleDraft) -> Result<Self, Self::Error> {
        let pattern = match draft.pattern.trim() {
            "" => RecurrencePattern::default(),
            tag => tag.parse()?,
        };

        let weekdays = draft
            .weekdays
            .iter()
            .map(|tag| tag.parse::<Weekday>())
            .collect::<Result<WeekdaySet, _>>()?;

        Ok(Self::new(
            pattern,
            draft.interval.unwrap_or(1),
            weekdays,
            draft.nth_day_of_month,
        ))
    }
}

impl TryFrom<RuleDraft> for RecurrenceRule {
    type Error = ValidationError;

    fn try_from(draft: RuleDraft) -> Result<Self, Self::Error> {
        Self::try_from(&draft)
    }
}

pub(crate) fn normalize_interval(interval: i64) -> NonZeroU32 {
    let clamped = u32::try_from(interval.max(1)).unwrap_or(u32::MAX);
    if i64::from(clamped) != interval {
        tracing::debug!(interval, clamped, "interval out of range, clamped");
    }
    NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN)
}

pub(crate) fn normalize_nth_day(day: i64) -> Option<u8> {
    if (NTH_DAY_MIN..=NTH_DAY_MAX).contains(&day) {
        u8::try_from(day).ok()
    } else {
        tracing::debug!(day, "nth day of month out of range, ignored");
        None
    }
}
