// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgAction, ArgMatches, Command, arg, value_parser};
use recurcal_core::{Config as CoreConfig, DisplayMonth, MonthGrid, MonthShift, RuleState, Weekday};

use crate::arg::RuleArgs;
use crate::grid_formatter::GridFormatter;

/// Render one month with the matching dates highlighted.
#[derive(Debug, Clone)]
pub struct CmdPreview {
    pub rule: RuleArgs,
    pub month: Option<DisplayMonth>,
    pub shifts: Vec<MonthShift>,
    pub week_start: Option<Weekday>,
}

impl CmdPreview {
    pub const NAME: &str = "preview";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("p")
            .about("Render a month grid with the matching dates highlighted")
            .args(RuleArgs::args())
            .arg(
                arg!(-m --month <MONTH> "Month to display, YYYY-MM")
                    .long_help("Month to display, YYYY-MM. Defaults to the start month.")
                    .value_parser(value_parser!(DisplayMonth)),
            )
            .arg(
                arg!(--shift <DELTA> "Move the displayed month, e.g. next, prev, +2m, -1y")
                    .value_parser(value_parser!(MonthShift))
                    .allow_hyphen_values(true)
                    .action(ArgAction::Append),
            )
            .arg(
                arg!(--"week-start" <DAY> "Weekday of the first column")
                    .value_parser(value_parser!(Weekday))
                    .ignore_case(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: RuleArgs::from(matches),
            month: matches.get_one("month").copied(),
            shifts: matches
                .get_many("shift")
                .map(|shifts| shifts.copied().collect())
                .unwrap_or_default(),
            week_start: matches.get_one("week-start").copied(),
        }
    }

    pub fn run(self, config: &CoreConfig) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering month preview...");
        let grid = self.grid(config)?;
        println!("{}", GridFormatter::new().format(&grid));
        Ok(())
    }

    /// Expands once, then moves the display month without expanding again.
    pub fn grid(&self, config: &CoreConfig) -> Result<MonthGrid, Box<dyn Error>> {
        let patch = self.rule.patch()?;
        let start = patch.start.flatten().ok_or("Start date is required")?;

        let mut state = RuleState::new(config.expander());
        state.update(patch);

        let mut month = self.month.unwrap_or(DisplayMonth::of(start));
        for shift in &self.shifts {
            month = month.shift(*shift);
        }
        tracing::debug!(%month, version = state.version(), "display month resolved");

        let week_start = self.week_start.unwrap_or(config.week_start);
        Ok(MonthGrid::new(month, state.occurrences(), week_start))
    }
}
