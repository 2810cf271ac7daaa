// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;

use jiff::civil::Date;

use crate::datetime::{DEFAULT_HORIZON_YEARS, DisplayMonth, add_days, add_months, add_years};
use crate::{DateRange, RecurrencePattern, RecurrenceRule};

/// Days in a week cycle of the weekly pattern.
const DAYS_PER_WEEK: i64 = 7;

/// Expands `rule` over `range` using the default horizon for open ranges.
pub fn expand(rule: &RecurrenceRule, range: &DateRange) -> Occurrences {
    Expander::default().expand(rule, range)
}

/// Enumerates the dates matching a recurrence rule.
///
/// Expansion is pure: the same rule and range always yield the same dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    horizon_years: u16,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_YEARS)
    }
}

impl Expander {
    /// Creates an expander bounding open ranges `horizon_years` past the start year.
    pub const fn new(horizon_years: u16) -> Self {
        Self { horizon_years }
    }

    /// The horizon applied to ranges without an end.
    pub const fn horizon_years(&self) -> u16 {
        self.horizon_years
    }

    /// Lists every date in `range` matching `rule`, strictly increasing.
    pub fn expand(&self, rule: &RecurrenceRule, range: &DateRange) -> Occurrences {
        let start = range.start;
        let end = range.effective_end(self.horizon_years);
        if start > end {
            tracing::debug!(%start, %end, "empty range, nothing to expand");
            return Occurrences::default();
        }

        let step = i64::from(rule.interval().get());
        let dates = match rule.pattern() {
            RecurrencePattern::Daily => daily(start, end, step),
            RecurrencePattern::Weekly => weekly(rule, start, end, step),
            RecurrencePattern::Monthly => monthly(rule, start, end, step),
            RecurrencePattern::Yearly => yearly(rule, start, end, step),
        };

        tracing::debug!(
            pattern = %rule.pattern(),
            interval = step,
            weekdays = %rule.weekdays(),
            nth_day = ?rule.nth_day_of_month(),
            %start,
            %end,
            count = dates.len(),
            "expanded recurrence"
        );
        Occurrences { dates }
    }
}

fn daily(start: Date, end: Date, step: i64) -> Vec<Date> {
    let mut dates = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|d| *d <= end) {
        dates.push(date);
        current = add_days(date, step);
    }
    dates
}

/// Walks day by day, skipping `7 * (step - 1)` days after every 7 processed
/// days counted from the range start.
fn weekly(rule: &RecurrenceRule, start: Date, end: Date, step: i64) -> Vec<Date> {
    let weekdays = rule.weekdays();
    if weekdays.is_empty() {
        return Vec::new();
    }

    let skip = DAYS_PER_WEEK * (step - 1);
    let mut dates = Vec::new();
    let mut elapsed: i64 = 0;
    let mut current = Some(start);
    while let Some(date) = current.filter(|d| *d <= end) {
        if weekdays.contains(date.weekday().into()) {
            dates.push(date);
        }

        elapsed += 1;
        current = add_days(date, 1);
        if skip > 0 && elapsed % DAYS_PER_WEEK == 0 {
            current = current.and_then(|d| add_days(d, skip));
        }
    }
    dates
}

fn monthly(rule: &RecurrenceRule, start: Date, end: Date, step: i64) -> Vec<Date> {
    if !has_day_filter(rule) {
        return Vec::new();
    }

    let mut dates = Vec::new();
    let mut month = Some(start.first_of_month());
    while let Some(first) = month.filter(|d| *d <= end) {
        scan_month(rule, first, start, end, &mut dates);
        month = add_months(first, step);
    }
    dates
}

fn yearly(rule: &RecurrenceRule, start: Date, end: Date, step: i64) -> Vec<Date> {
    if !has_day_filter(rule) {
        return Vec::new();
    }

    let mut dates = Vec::new();
    let mut year = Some(start.first_of_year());
    while let Some(first) = year.filter(|d| *d <= end) {
        let mut month = Some(first);
        while let Some(first_of_month) = month.filter(|d| d.year() == first.year() && *d <= end) {
            scan_month(rule, first_of_month, start, end, &mut dates);
            month = add_months(first_of_month, 1);
        }
        year = add_years(first, step);
    }
    dates
}

fn has_day_filter(rule: &RecurrenceRule) -> bool {
    !rule.weekdays().is_empty() || rule.nth_day_of_month().is_some()
}

/// Pushes the days of the month starting at `first` that match the rule and lie
/// in `start..=end`. Each day is tested once, so a day matching both filters is
/// pushed once.
fn scan_month(rule: &RecurrenceRule, first: Date, start: Date, end: Date, dates: &mut Vec<Date>) {
    let days = first.series(jiff::Span::new().days(1));
    for day in days.take(first.days_in_month() as usize) {
        if day > end {
            break;
        }
        if day >= start && rule.matches_day(day) {
            dates.push(day);
        }
    }
}

/// The dates produced by an expansion, sorted and free of duplicates.
///
/// Membership compares calendar dates only: year, month and day.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Occurrences {
    dates: Vec<Date>,
}

impl Occurrences {
    /// Whether `date` is one of the occurrences.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// The occurrences falling in `month`.
    pub fn in_month(&self, month: DisplayMonth) -> &[Date] {
        let lo = self.dates.partition_point(|d| *d < month.first_day());
        let hi = self.dates.partition_point(|d| *d <= month.last_day());
        &self.dates[lo..hi]
    }

    /// The occurrences as a slice.
    pub fn as_slice(&self) -> &[Date] {
        &self.dates
    }

    /// Consumes the occurrences into a vector.
    pub fn into_vec(self) -> Vec<Date> {
        self.dates
    }
}

impl Deref for Occurrences {
    type Target = [Date];

    fn deref(&self) -> &Self::Target {
        &self.dates
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}
