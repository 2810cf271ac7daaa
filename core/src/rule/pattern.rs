// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::ValidationError;

const PATTERN_DAILY: &str = "daily";
const PATTERN_WEEKLY: &str = "weekly";
const PATTERN_MONTHLY: &str = "monthly";
const PATTERN_YEARLY: &str = "yearly";

/// The top-level repeat unit of a recurrence rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecurrencePattern {
    /// Every N days.
    #[default]
    Daily,

    /// Selected weekdays, every N weeks.
    Weekly,

    /// Selected weekdays or a fixed day of month, every N months.
    Monthly,

    /// Selected weekdays or a fixed day of month, every N years.
    Yearly,
}

impl AsRef<str> for RecurrencePattern {
    fn as_ref(&self) -> &str {
        match self {
            RecurrencePattern::Daily => PATTERN_DAILY,
            RecurrencePattern::Weekly => PATTERN_WEEKLY,
            RecurrencePattern::Monthly => PATTERN_MONTHLY,
            RecurrencePattern::Yearly => PATTERN_YEARLY,
        }
    }
}

impl Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for RecurrencePattern {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            PATTERN_DAILY => Ok(RecurrencePattern::Daily),
            PATTERN_WEEKLY => Ok(RecurrencePattern::Weekly),
            PATTERN_MONTHLY => Ok(RecurrencePattern::Monthly),
            PATTERN_YEARLY => Ok(RecurrencePattern::Yearly),
            _ => Err(ValidationError::UnknownPattern(s.to_string())),
        }
    }
}
