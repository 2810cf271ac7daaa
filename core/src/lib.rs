// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rules for calendar dates: expansion into concrete dates and
//! month grids marking the recurring days.

#![warn(
    trivial_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    clippy::dbg_macro
)]

mod config;
mod datetime;
mod error;
mod expand;
mod grid;
mod rule;
mod state;

pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{
    DEFAULT_HORIZON_YEARS, DateRange, DisplayMonth, MonthShift, add_days, add_months, add_years,
    parse_date,
};
pub use crate::error::ValidationError;
pub use crate::expand::{Expander, Occurrences, expand};
pub use crate::grid::{GridCell, MonthGrid};
pub use crate::rule::{
    NTH_DAY_MAX, NTH_DAY_MIN, RecurrencePattern, RecurrenceRule, RuleDraft, Weekday, WeekdaySet,
};
pub use crate::state::{Observer, RulePatch, RuleState, SubscriptionId};
