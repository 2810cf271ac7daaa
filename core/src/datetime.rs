// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod month;
mod range;
mod util;

pub use month::{DisplayMonth, MonthShift};
pub use range::{DEFAULT_HORIZON_YEARS, DateRange};
pub use util::{add_days, add_months, add_years, parse_date};
