// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::datetime::DEFAULT_HORIZON_YEARS;
use crate::{Expander, Weekday};

/// The name of the application.
pub const APP_NAME: &str = "recurcal";

/// Core configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Years past the start year that an open-ended range extends to.
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u16,

    /// The weekday shown in the first column of a month grid.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
            week_start: default_week_start(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) {
        if self.horizon_years == 0 {
            tracing::warn!("horizon_years must be at least 1, using 1");
            self.horizon_years = 1;
        }
    }

    /// An expander honouring the configured horizon.
    pub fn expander(&self) -> Expander {
        Expander::new(self.horizon_years)
    }
}

const fn default_horizon_years() -> u16 {
    DEFAULT_HORIZON_YEARS
}

const fn default_week_start() -> Weekday {
    Weekday::Sunday
}
