// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Write};

use colored::Colorize;
use recurcal_core::{GridCell, MonthGrid};

/// Every cell is a right-aligned day number followed by a marker column.
const CELL_WIDTH: usize = 3;

const RECURRING_MARKER: char = '*';

#[derive(Debug, Default, Clone, Copy)]
pub struct GridFormatter;

impl GridFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format<'a>(&self, grid: &'a MonthGrid) -> Display<'a> {
        Display { grid }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    grid: &'a MonthGrid,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = CELL_WIDTH * 7;
        let title = self.grid.month().title();
        writeln!(f, "{}", format!("{title:^width$}").trim_end().bold())?;

        let mut header = String::with_capacity(width);
        for day in self.grid.header() {
            let name = day.short_name();
            write!(header, "{:<CELL_WIDTH$}", name.get(..2).unwrap_or(name))?;
        }
        writeln!(f, "{}", header.trim_end())?;

        for row in self.grid.rows() {
            let mut line = String::with_capacity(width);
            for cell in row {
                match cell {
                    GridCell::Blank => line.push_str(&" ".repeat(CELL_WIDTH)),
                    GridCell::Day { date, recurring } => {
                        let day = format!("{:>2}", date.day());
                        if *recurring {
                            write!(line, "{}{RECURRING_MARKER}", day.green().bold())?;
                        } else {
                            write!(line, "{day} ")?;
                        }
                    }
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        match self.grid.recurring_count() {
            1 => write!(f, "1 matching date in {title}"),
            n => write!(f, "{n} matching dates in {title}"),
        }
    }
}
