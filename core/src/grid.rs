// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{DisplayMonth, Occurrences, Weekday};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the first or after the last day of the month.
    Blank,

    /// A day of the displayed month.
    Day {
        /// The calendar date of the cell.
        date: Date,

        /// Whether the date is one of the occurrences.
        recurring: bool,
    },
}

impl GridCell {
    /// The date of the cell, `None` for padding.
    pub fn date(&self) -> Option<Date> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { date, .. } => Some(*date),
        }
    }

    /// Whether the cell is a day that recurs.
    pub fn is_recurring(&self) -> bool {
        match self {
            GridCell::Blank => false,
            GridCell::Day { recurring, .. } => *recurring,
        }
    }
}

/// A month laid out in rows of seven days, marking the recurring ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: DisplayMonth,
    week_start: Weekday,
    rows: Vec<[GridCell; 7]>,
}

impl MonthGrid {
    /// Lays out `month` with `week_start` in the first column.
    pub fn new(month: DisplayMonth, occurrences: &Occurrences, week_start: Weekday) -> Self {
        let first = month.first_day();
        let leading = usize::from(week_start.days_until(first.weekday().into()));

        let days = first
            .series(jiff::Span::new().days(1))
            .take_while(|date| month.contains(*date))
            .map(|date| GridCell::Day {
                date,
                recurring: occurrences.contains(date),
            });
        let cells = std::iter::repeat_n(GridCell::Blank, leading).chain(days);

        let mut rows = Vec::with_capacity(6);
        let mut row = [GridCell::Blank; 7];
        let mut col = 0;
        for cell in cells {
            row[col] = cell;
            col += 1;
            if col == 7 {
                rows.push(row);
                row = [GridCell::Blank; 7];
                col = 0;
            }
        }
        if col > 0 {
            rows.push(row);
        }

        Self {
            month,
            week_start,
            rows,
        }
    }

    /// The displayed month.
    pub fn month(&self) -> DisplayMonth {
        self.month
    }

    /// The weekdays in column order.
    pub fn header(&self) -> [Weekday; 7] {
        std::array::from_fn(|i| self.week_start.wrapping_add(i as u8))
    }

    /// The rows of the grid, each with seven cells.
    pub fn rows(&self) -> &[[GridCell; 7]] {
        &self.rows
    }

    /// The cell at `row`, `col`, if inside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The number of recurring days in the grid.
    pub fn recurring_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_recurring())
            .count()
    }
}
