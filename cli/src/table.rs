// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

/// A rendered view over rows of `T`, laid out by a list of columns.
pub struct Table<'a, T, C: TableColumn<T>> {
    format: OutputFormat,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(format: OutputFormat, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            format,
            columns,
            data,
        }
    }

    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = " ";

        let table: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = get_column_max_width(&table, self.columns.len());
        for (cells, row) in table.into_iter().zip(self.data) {
            let last = cells.len().saturating_sub(1);
            for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let width = widths[i];
                let cell = match col.padding_direction() {
                    // last column does not need padding if it's left-aligned
                    PaddingDirection::Left if i == last => cell.into_owned(),
                    PaddingDirection::Left => pad(&cell, width, false),
                    PaddingDirection::Right => pad(&cell, width, true),
                };

                match col.get_color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if i < last {
                    write!(f, "{SEPARATOR}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = self
            .data
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| (col.key().into_owned(), col.json(row)))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Table => self.fmt_basic(f),
            OutputFormat::Json => self.fmt_json(f),
        }
    }
}

pub trait TableColumn<T> {
    /// Key of the column in JSON output.
    fn key(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    /// Value of the cell in JSON output, the formatted text unless overridden.
    fn json(&self, data: &T) -> serde_json::Value {
        serde_json::Value::String(self.format(data).into_owned())
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, right: bool) -> String {
    // unicode-aware, format! pads by chars instead of display width
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match right {
        true => format!("{fill}{cell}"),
        false => format!("{cell}{fill}"),
    }
}

fn get_column_max_width(table: &[Vec<Cow<'_, str>>], columns: usize) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
