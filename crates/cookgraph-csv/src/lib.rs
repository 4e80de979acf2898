//! Reading of delimited knowledge-graph tables.
//!
//! This library turns a header-led delimited text file into a [`Table`] of
//! row-numbered records, with helpers for multi-valued cells and a list of
//! non-fatal [`Warning`]s describing oddly shaped rows.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;

pub use error::{Error, MissingColumn, Result};
pub use reader::{split_multi, ReadOptions, Row, Table, MULTI_VALUE_DELIMITER};
pub use warning::Warning;
