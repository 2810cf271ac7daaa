// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, sync::Arc};

use clap::{ArgMatches, Command};
use recurcal_core::{Config as CoreConfig, Occurrences, RuleState};

use crate::arg::{CommonArgs, OutputFormat, RuleArgs};
use crate::occurrence_formatter::OccurrenceFormatter;

/// List the dates matching a recurrence rule.
#[derive(Debug, Clone)]
pub struct CmdExpand {
    pub rule: RuleArgs,
    pub output_format: OutputFormat,
}

impl CmdExpand {
    pub const NAME: &str = "expand";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("e")
            .about("List the dates matching a recurrence rule")
            .args(RuleArgs::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: RuleArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &CoreConfig) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "expanding recurrence rule...");
        let occurrences = self.expand(config)?;
        let formatter = OccurrenceFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&occurrences));
        Ok(())
    }

    pub fn expand(&self, config: &CoreConfig) -> Result<Arc<Occurrences>, Box<dyn Error>> {
        let mut state = RuleState::new(config.expander());
        let patch = self.rule.patch()?;
        Ok(Arc::clone(state.update(patch)))
    }
}
