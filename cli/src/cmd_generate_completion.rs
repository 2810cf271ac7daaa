// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Print a shell completion script to stdout.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one("shell").copied().unwrap_or(Shell::Bash),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, bin_name, buf),
            None => generate(Nushell, &mut cmd, bin_name, buf),
        }
    }
}

/// Shells with a completion generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, nushell has its own crate.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as Builtin;

        match self {
            Shell::Bash => Some(Builtin::Bash),
            Shell::Elvish => Some(Builtin::Elvish),
            Shell::Fish => Some(Builtin::Fish),
            Shell::PowerShell => Some(Builtin::PowerShell),
            Shell::Zsh => Some(Builtin::Zsh),
            Shell::Nushell => None,
        }
    }
}
