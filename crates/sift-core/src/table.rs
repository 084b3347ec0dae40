#![forbid(unsafe_code)]

//! In-memory tabular data.
//!
//! [`Table`] is an ordered collection of rows with named columns. A table is
//! immutable once built; every derivation ([`head`](Table::head),
//! [`filter_eq`](Table::filter_eq)) produces a new table sharing nothing with
//! its source.
//!
//! # Invariants
//!
//! 1. Every row has exactly `columns().len()` cells (enforced at
//!    construction).
//! 2. All derivations preserve original row order.
//! 3. `head(row_count())` returns the whole table unmodified;
//!    `head(0)` returns an empty table with the same schema.
//! 4. `distinct` yields values in first-occurrence order.

use crate::error::{DataError, Result};
use crate::value::Value;

/// An immutable table of [`Value`] cells with named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from column names and rows.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::RaggedRow`] if any row's arity differs from the
    /// column count.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let expected = columns.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(DataError::RaggedRow {
                    row: i + 1,
                    found: row.len(),
                    expected,
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// An empty table with the given schema.
    #[must_use]
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownColumn`] if no column has that name.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::unknown_column(name))
    }

    /// A single row by index.
    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&[Value]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// A single cell by row and column index.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// The first `n` rows, in original order.
    ///
    /// `n` larger than the row count is clamped, so `head(row_count())` is
    /// the identity.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows[..n.min(self.rows.len())].to_vec(),
        }
    }

    /// Rows whose cell in `column` equals `value`, in original order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownColumn`] if the column does not exist.
    pub fn filter_eq(&self, column: &str, value: &Value) -> Result<Self> {
        Ok(self.filter_eq_at(self.column_index(column)?, value))
    }

    /// Rows whose cell at column index `idx` equals `value`, in original
    /// order. Callers resolve the index once via
    /// [`column_index`](Self::column_index); an out-of-range index matches
    /// nothing.
    #[must_use]
    pub fn filter_eq_at(&self, idx: usize, value: &Value) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|r| r.get(idx) == Some(value))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Unique values of a column, in first-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownColumn`] if the column does not exist.
    pub fn distinct(&self, column: &str) -> Result<Vec<Value>> {
        let idx = self.column_index(column)?;
        let mut seen = ahash::AHashSet::with_capacity(self.rows.len().min(1024));
        let mut out = Vec::new();
        for row in &self.rows {
            let v = &row[idx];
            if seen.insert(v.clone()) {
                out.push(v.clone());
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
