#![forbid(unsafe_code)]

//! Tabular view over a [`Table`].

use sift_core::{Table, Value};
use unicode_width::UnicodeWidthStr;

use crate::{Widget, fit};

/// Widest a single column may grow before its cells are truncated.
const MAX_COL_WIDTH: usize = 24;

/// Gap between columns, in display columns.
const COL_GAP: usize = 2;

/// Rows shown when the caller sets no explicit cap.
const DEFAULT_MAX_ROWS: usize = 50;

/// Renders a table with display-width-aligned columns.
///
/// Text cells are left-aligned, numeric cells right-aligned. Columns that do
/// not fit the render width are elided with a trailing `…` header; rows past
/// the cap collapse into a `… N more rows` footer.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a Table,
    max_rows: usize,
}

impl<'a> TableView<'a> {
    /// View over a table with the default row cap.
    #[must_use]
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    /// Set the row cap.
    #[must_use]
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    fn pad(cell: &str, width: usize, right_align: bool) -> String {
        let fitted = fit(cell, width);
        let fill = " ".repeat(width.saturating_sub(fitted.width()));
        if right_align {
            format!("{fill}{fitted}")
        } else {
            format!("{fitted}{fill}")
        }
    }
}

impl Widget for TableView<'_> {
    fn render(&self, width: u16) -> Vec<String> {
        let width = width as usize;
        let shown = self.table.row_count().min(self.max_rows);

        // Natural width per column: header vs. the cells actually shown.
        let widths: Vec<usize> = self
            .table
            .columns()
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let mut w = name.width();
                for row in 0..shown {
                    if let Some(cell) = self.table.cell(row, col) {
                        w = w.max(cell.to_string().width());
                    }
                }
                w.min(MAX_COL_WIDTH)
            })
            .collect();

        // Keep whole columns while they fit; elide the rest.
        let mut kept = 0;
        let mut used = 0;
        for &w in &widths {
            let need = w + if kept > 0 { COL_GAP } else { 0 };
            if kept > 0 && used + need > width {
                break;
            }
            used += need;
            kept += 1;
        }
        let elided = self.table.column_count() - kept;

        let numeric: Vec<bool> = (0..kept)
            .map(|col| matches!(self.table.cell(0, col), Some(Value::Num(_))))
            .collect();

        let line = |cells: Vec<String>| -> String {
            let mut out = cells.join(&" ".repeat(COL_GAP));
            if elided > 0 {
                out.push_str("  \u{2026}");
            }
            out
        };

        let mut lines = Vec::with_capacity(shown + 3);
        lines.push(line(
            self.table.columns()[..kept]
                .iter()
                .enumerate()
                .map(|(col, name)| Self::pad(name, widths[col], false))
                .collect(),
        ));
        lines.push("\u{2500}".repeat(used.min(width)));

        if self.table.is_empty() {
            lines.push("(no rows)".to_owned());
            return lines;
        }
        for row in 0..shown {
            lines.push(line(
                (0..kept)
                    .map(|col| {
                        let cell = self
                            .table
                            .cell(row, col)
                            .map(Value::to_string)
                            .unwrap_or_default();
                        Self::pad(&cell, widths[col], numeric[col])
                    })
                    .collect(),
            ));
        }
        let more = self.table.row_count() - shown;
        if more > 0 {
            let noun = if more == 1 { "row" } else { "rows" };
            lines.push(format!("\u{2026} {more} more {noun}"));
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
