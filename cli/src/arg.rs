// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use recurcal_core::{DateRange, RecurrencePattern, RulePatch, ValidationError, WeekdaySet};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// An array of JSON objects.
    Json,
    /// Aligned columns for the terminal.
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Recurrence rule and date range as given on the command line.
///
/// Weekdays and dates are kept as typed and validated in [`RuleArgs::patch`],
/// so malformed input is reported with the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleArgs {
    pub pattern: RecurrencePattern,
    pub interval: Option<i64>,
    pub weekdays: Vec<String>,
    pub nth_day: Option<i64>,
    pub start: String,
    pub end: Option<String>,
}

impl RuleArgs {
    pub fn args() -> [Arg; 6] {
        [
            arg!(-p --pattern <PATTERN> "Recurrence pattern")
                .value_parser(value_parser!(RecurrencePattern))
                .ignore_case(true)
                .default_value("daily"),
            arg!(-i --interval <N> "Repeat every N days, weeks, months or years")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
            arg!(-w --weekdays <DAYS> "Weekdays to match, e.g. Mon,Wed,Fri")
                .value_delimiter(',')
                .action(ArgAction::Append),
            arg!(-n --"nth-day" <N> "Day of month to match, 1 to 31")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
            arg!(-s --start <DATE> "First date of the range, YYYY-MM-DD").required(true),
            arg!(-e --end <DATE> "Last date of the range, YYYY-MM-DD")
                .long_help(
                    "\
Last date of the range, YYYY-MM-DD. Defaults to December 31 of the start year plus the expansion \
horizon, 10 years unless configured otherwise.",
                ),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            pattern: matches.get_one("pattern").copied().unwrap_or_default(),
            interval: matches.get_one("interval").copied(),
            weekdays: matches
                .get_many::<String>("weekdays")
                .map(|days| days.cloned().collect())
                .unwrap_or_default(),
            nth_day: matches.get_one("nth-day").copied(),
            start: matches
                .get_one::<String>("start")
                .cloned()
                .unwrap_or_default(),
            end: matches.get_one("end").cloned(),
        }
    }

    /// Validates the input into a patch setting every rule and range field.
    pub fn patch(&self) -> Result<RulePatch, ValidationError> {
        let weekdays = self
            .weekdays
            .iter()
            .map(|tag| tag.parse())
            .collect::<Result<WeekdaySet, _>>()?;
        let range = self.range()?;

        Ok(RulePatch {
            pattern: Some(self.pattern),
            interval: Some(self.interval.unwrap_or(1)),
            weekdays: Some(weekdays),
            nth_day_of_month: Some(self.nth_day),
            start: Some(Some(range.start)),
            end: Some(range.end),
        })
    }

    pub fn range(&self) -> Result<DateRange, ValidationError> {
        DateRange::parse(&self.start, self.end.as_deref())
    }
}
