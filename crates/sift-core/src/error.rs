#![forbid(unsafe_code)]

//! Error taxonomy for the data layer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset not found: {path}")]
    MissingDataset { path: PathBuf },

    #[error("dataset is empty (no header row): {path}")]
    EmptyDataset { path: PathBuf },

    #[error("row {row} has {found} fields, header has {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unterminated quoted field starting at row {row}")]
    UnterminatedQuote { row: usize },

    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

impl DataError {
    #[must_use]
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }
}
