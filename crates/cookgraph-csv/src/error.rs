//! Error types for cookgraph-csv operations.

use std::io;
use thiserror::Error;

/// The error type for cookgraph-csv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading a table.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The underlying CSV reader rejected a row.
    ///
    /// `row` is the 1-based data row (header excluded), or 0 when the
    /// failure happened while reading the header.
    #[error("{table}: CSV error at row {row}: {source}")]
    Csv {
        /// Name of the table being read.
        table: String,
        /// 1-based data row number.
        row: usize,
        /// The underlying parser error.
        #[source]
        source: csv::Error,
    },

    /// The table has no header row.
    #[error("{table}: missing header row")]
    MissingHeader {
        /// Name of the table being read.
        table: String,
    },

    /// The header lacks a column the caller requires.
    #[error(transparent)]
    MissingColumn(#[from] MissingColumn),
}

/// A required column is absent from a table's header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{table}: header is missing required column '{column}'")]
pub struct MissingColumn {
    /// Name of the table being read.
    pub table: String,
    /// The absent column.
    pub column: String,
}

/// A specialized Result type for cookgraph-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
