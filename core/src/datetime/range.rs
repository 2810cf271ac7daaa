// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::ValidationError;
use crate::datetime::util::parse_date;

/// How many years past the start year an open-ended range extends.
pub const DEFAULT_HORIZON_YEARS: u16 = 10;

/// An inclusive range of calendar dates with an optional end.
///
/// NOTE: an open-ended range is bounded by the expansion horizon, which ends on
/// December 31 of `start.year() + horizon_years`. The horizon only guarantees
/// that expansion terminates; callers that need a different bound should pass
/// an explicit end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DateRange {
    /// First date of the range, inclusive.
    pub start: Date,

    /// Last date of the range, inclusive. `None` means up to the horizon.
    #[serde(default)]
    pub end: Option<Date>,
}

impl DateRange {
    /// Creates a range, `end` may be before `start` in which case it is empty.
    pub const fn new(start: Date, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// A range from `start` to the expansion horizon.
    pub const fn starting(start: Date) -> Self {
        Self { start, end: None }
    }

    /// A range from `start` to `end`, both inclusive.
    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parses `YYYY-MM-DD` start and optional end dates from form input.
    ///
    /// An empty end is treated as absent.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, ValidationError> {
        let start = parse_date("start", start)?;
        let end = match end.map(str::trim) {
            None | Some("") => None,
            Some(end) => Some(parse_date("end", end)?),
        };
        Ok(Self { start, end })
    }

    /// The explicit end, or the last day of the horizon.
    pub fn effective_end(&self, horizon_years: u16) -> Date {
        self.end
            .unwrap_or_else(|| horizon_end(self.start, horizon_years))
    }

    /// Whether the range holds no dates.
    pub fn is_empty(&self, horizon_years: u16) -> bool {
        self.start > self.effective_end(horizon_years)
    }

    /// Whether `date` lies within the range, both ends inclusive.
    pub fn contains(&self, date: Date, horizon_years: u16) -> bool {
        self.start <= date && date <= self.effective_end(horizon_years)
    }
}

/// December 31 of `start.year() + years`, clamped to the last supported date.
fn horizon_end(start: Date, years: u16) -> Date {
    let year = i32::from(start.year()) + i32::from(years);
    i16::try_from(year)
        .ok()
        .and_then(|year| Date::new(year, 12, 31).ok())
        .unwrap_or(Date::MAX)
}
