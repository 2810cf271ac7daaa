// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, C: TableColumn<T>, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, C: TableColumn<T>, T> fmt::Display for Table<'_, S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.fmt_table(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    /// Key of the column in structured output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }

    fn json(&self, data: &T) -> serde_json::Value {
        serde_json::Value::String(self.format(data).into_owned())
    }
}

pub trait TableStyle {
    fn fmt_table<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Aligned, colored columns separated by spaces, one row per line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: "  " }
    }
}

impl TableStyle for TableStyleBasic {
    fn fmt_table<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = column_max_width(&table, columns.len());

        for (i, (cells, row)) in table.iter().zip(data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let last = j + 1 == columns.len();
                let padded = match col.padding_direction() {
                    // last column does not need padding if it's left-aligned
                    PaddingDirection::Left if last => cell.to_string(),
                    PaddingDirection::Left => pad(cell, widths[j], false),
                    PaddingDirection::Right => pad(cell, widths[j], true),
                };
                match col.color(row) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }
                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// A pretty-printed JSON array with one object per row.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn fmt_table<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| (col.name().into_owned(), col.json(row)))
                    .collect::<serde_json::Map<_, _>>()
                    .into()
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

fn column_max_width(table: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (width, cell) in max_width.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    max_width
}

/// Pads by display width, which differs from `{:<n}` for wide characters.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}
