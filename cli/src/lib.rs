// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for expanding recurrence rules and previewing them
//! on a month grid.

mod arg;
mod cli;
mod cmd_expand;
mod cmd_generate_completion;
mod cmd_preview;
mod config;
mod grid_formatter;
mod occurrence_formatter;
mod table;

pub use crate::arg::OutputFormat;
pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_expand::CmdExpand;
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_preview::CmdPreview;
pub use crate::config::{Config, parse_config};
