// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::OnceLock;

use jiff::civil::Date;
use regex::Regex;

use crate::ValidationError;

const MIN_MONTH_INDEX: i64 = -9999 * 12;
const MAX_MONTH_INDEX: i64 = 9999 * 12 + 11;

/// The month page shown by a grid renderer.
///
/// It only selects which part of an already expanded date set is displayed and
/// carries no recurrence semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayMonth {
    year: i16,
    month: i8,
}

impl DisplayMonth {
    /// Creates a display month, `None` if the month is not in `1..=12` or the
    /// year is outside the supported calendar.
    pub fn new(year: i16, month: i8) -> Option<Self> {
        Date::new(year, month, 1).ok().map(Self::of)
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year.
    pub const fn year(&self) -> i16 {
        self.year
    }

    /// The month, `1..=12`.
    pub const fn month(&self) -> i8 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    /// The last day of the month.
    pub fn last_day(&self) -> Date {
        self.first_day().last_of_month()
    }

    /// The number of days in the month.
    pub fn days_in_month(&self) -> i8 {
        self.first_day().days_in_month()
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Moves the page by `n` months, stopping at the ends of the calendar.
    pub fn shift_months(self, n: i64) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let index = index
            .saturating_add(n)
            .clamp(MIN_MONTH_INDEX, MAX_MONTH_INDEX);
        // Both casts are in range after the clamp above.
        Self {
            year: index.div_euclid(12) as i16,
            month: (index.rem_euclid(12) + 1) as i8,
        }
    }

    /// Moves the page by `n` years, stopping at the ends of the calendar.
    pub fn shift_years(self, n: i64) -> Self {
        self.shift_months(n.saturating_mul(12))
    }

    /// Applies a navigation delta.
    pub fn shift(self, delta: MonthShift) -> Self {
        self.shift_months(delta.months)
    }

    /// Human readable title, e.g. `January 2024`.
    pub fn title(&self) -> String {
        self.first_day().strftime("%B %Y").to_string()
    }
}

impl Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for DisplayMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i16 = year.parse().map_err(|_| invalid())?;
        let month: i8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

/// A navigation delta for a [`DisplayMonth`], counted in months.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthShift {
    months: i64,
}

impl MonthShift {
    /// One month forward.
    pub const NEXT_MONTH: MonthShift = MonthShift::months(1);

    /// One month back.
    pub const PREV_MONTH: MonthShift = MonthShift::months(-1);

    /// One year forward.
    pub const NEXT_YEAR: MonthShift = MonthShift::years(1);

    /// One year back.
    pub const PREV_YEAR: MonthShift = MonthShift::years(-1);

    /// A shift of `n` months.
    pub const fn months(n: i64) -> Self {
        Self { months: n }
    }

    /// A shift of `n` years.
    pub const fn years(n: i64) -> Self {
        Self {
            months: n.saturating_mul(12),
        }
    }

    /// The shift in months.
    pub const fn as_months(&self) -> i64 {
        self.months
    }
}

impl Display for MonthShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}m", self.months)
    }
}

impl FromStr for MonthShift {
    type Err = ValidationError;

    /// Parses `next`, `prev`, `next-year`, `prev-year`, or a signed count with a
    /// unit such as `+1m`, `-2 months`, `1y`, `-1 years`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "next-month" => return Ok(Self::NEXT_MONTH),
            "prev" | "prev-month" => return Ok(Self::PREV_MONTH),
            "next-year" => return Ok(Self::NEXT_YEAR),
            "prev-year" => return Ok(Self::PREV_YEAR),
            _ => {}
        }

        const RE: &str = r"(?i)^\s*([+-]?\d+)\s*(m|mo|months?|y|years?)\s*$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).expect("valid regex"));
        if let Some(captures) = re.captures(s)
            && let Ok(n) = captures[1].parse::<i64>()
        {
            let unit = captures[2].to_ascii_lowercase();
            return Ok(if unit.starts_with('y') {
                Self::years(n)
            } else {
                Self::months(n)
            });
        }

        Err(ValidationError::InvalidShift(s.to_string()))
    }
}
