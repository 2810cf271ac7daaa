// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use jiff::civil::Date;
use recurcal_core::{Occurrences, Weekday};

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};

#[derive(Debug)]
pub struct OccurrenceFormatter {
    columns: Vec<OccurrenceColumn>,
    format: OutputFormat,
}

impl OccurrenceFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                OccurrenceColumn::Index,
                OccurrenceColumn::Date,
                OccurrenceColumn::Weekday,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self, occurrences: &Occurrences) -> Display<'_> {
        let rows = occurrences
            .iter()
            .enumerate()
            .map(|(i, date)| Row {
                index: i + 1,
                date: *date,
            })
            .collect();

        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: Vec<Row>,
    formatter: &'a OccurrenceFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, &self.rows)
            ),
            OutputFormat::Table if self.rows.is_empty() => write!(f, "No matching dates"),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, &self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Row {
    index: usize,
    date: Date,
}

#[derive(Debug, Clone, Copy)]
enum OccurrenceColumn {
    Index,
    Date,
    Weekday,
}

impl TableColumn<Row> for OccurrenceColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            OccurrenceColumn::Index => "index",
            OccurrenceColumn::Date => "date",
            OccurrenceColumn::Weekday => "weekday",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a Row) -> Cow<'a, str> {
        match self {
            OccurrenceColumn::Index => row.index.to_string().into(),
            OccurrenceColumn::Date => row.date.to_string().into(),
            OccurrenceColumn::Weekday => Weekday::from(row.date.weekday()).short_name().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            OccurrenceColumn::Index => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &Row) -> Option<Color> {
        match self {
            OccurrenceColumn::Weekday => match Weekday::from(row.date.weekday()) {
                Weekday::Saturday | Weekday::Sunday => Some(Color::Cyan),
                _ => None,
            },
            _ => None,
        }
    }

    fn json(&self, row: &Row) -> serde_json::Value {
        match self {
            OccurrenceColumn::Index => row.index.into(),
            _ => self.format(row).into_owned().into(),
        }
    }
}
