//! Table reading operations.
//!
//! A [`Table`] is a fully materialized delimited text file: a header row
//! naming the columns, followed by data rows. Rows keep their 1-based data
//! row number (header excluded) so callers can point back at the offending
//! row when validation fails.
//!
//! # Examples
//!
//! ```
//! use cookgraph_csv::reader::{ReadOptions, Table};
//!
//! # fn example() -> cookgraph_csv::Result<()> {
//! let data = "nodeId,name,labels\nR1,番茄炒蛋,Recipe\n";
//! let table = Table::from_reader("nodes", data.as_bytes(), &ReadOptions::default())?;
//!
//! let id = table.column("nodeId").unwrap();
//! assert_eq!(table.rows()[0].get(id), Some("R1"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::error::{Error, MissingColumn, Result};
use crate::warning::Warning;
use std::io::Read;
use std::path::Path;

/// Default cell delimiter of the outer table.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Delimiter separating values inside a multi-valued cell.
pub const MULTI_VALUE_DELIMITER: char = ',';

/// UTF-8 byte order mark, which spreadsheet exports often prepend.
const BOM: char = '\u{feff}';

/// Options controlling how a table is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Outer cell delimiter byte.
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// A single data row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based data row number (header excluded).
    number: usize,
    /// Raw cell contents, in column order.
    cells: Vec<String>,
}

impl Row {
    /// Creates a row from its number and raw cells.
    #[must_use]
    pub fn new(number: usize, cells: Vec<String>) -> Self {
        Self { number, cells }
    }

    /// Returns the 1-based data row number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the trimmed cell at `index`, or `None` when the cell is
    /// missing or contains only whitespace.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells
            .get(index)
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
    }

    /// Like [`get`](Self::get), for a column that may not exist in the table.
    #[must_use]
    pub fn get_opt(&self, index: Option<usize>) -> Option<&str> {
        index.and_then(|i| self.get(i))
    }

    /// Returns the number of raw cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A parsed table with its header, data rows and read warnings.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Row>,
    warnings: Vec<Warning>,
}

impl Table {
    /// Parses a table from any reader.
    ///
    /// Rows whose cells are all empty are skipped with a
    /// [`Warning::BlankRow`]. Rows with a cell count different from the
    /// header are kept and reported with a [`Warning::RaggedRow`].
    ///
    /// # Arguments
    ///
    /// * `name` - Table name used in errors (usually the file name).
    /// * `reader` - Source of the delimited text.
    /// * `options` - Parsing options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHeader`] for an empty input and
    /// [`Error::Csv`] when the underlying parser rejects a row (for example
    /// invalid UTF-8).
    pub fn from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        options: &ReadOptions,
    ) -> Result<Self> {
        let name = name.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header_record = csv_reader.headers().map_err(|source| Error::Csv {
            table: name.clone(),
            row: 0,
            source,
        })?;

        let headers: Vec<String> = header_record
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { h.trim_start_matches(BOM) } else { h };
                h.trim().to_string()
            })
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(Error::MissingHeader { table: name });
        }

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (index, record) in csv_reader.records().enumerate() {
            let number = index + 1;
            let record = record.map_err(|source| Error::Csv {
                table: name.clone(),
                row: number,
                source,
            })?;

            if record.iter().all(|cell| cell.trim().is_empty()) {
                warnings.push(Warning::BlankRow { row: number });
                continue;
            }

            if record.len() != headers.len() {
                warnings.push(Warning::RaggedRow {
                    row: number,
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            rows.push(Row::new(number, record.iter().map(str::to_owned).collect()));
        }

        tracing::debug!(
            table = %name,
            columns = headers.len(),
            rows = rows.len(),
            warnings = warnings.len(),
            "Read table"
        );

        Ok(Self {
            name,
            headers,
            rows,
            warnings,
        })
    }

    /// Reads a table from a file, blocking the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, otherwise the
    /// errors of [`from_reader`](Self::from_reader).
    pub fn from_path(path: &Path, options: &ReadOptions) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(table_name(path), std::io::BufReader::new(file), options)
    }

    /// Reads a table from a file asynchronously.
    ///
    /// The file is read in full before parsing.
    ///
    /// # Errors
    ///
    /// Same as [`from_path`](Self::from_path).
    pub async fn read(path: &Path, options: &ReadOptions) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Self::from_reader(table_name(path), bytes.as_slice(), options)
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed header names.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows, in file order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the warnings collected while reading.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the index of the column named `name`, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolves the indices of columns that must be present in the header.
    ///
    /// Indices are returned in the order the names were given, so the result
    /// can be destructured directly. The check looks only at the header and
    /// so applies to tables without data rows too.
    ///
    /// # Errors
    ///
    /// Returns [`MissingColumn`] for the first name absent from the header.
    pub fn require_columns<const N: usize>(
        &self,
        names: [&str; N],
    ) -> std::result::Result<[usize; N], MissingColumn> {
        let mut indices = [0; N];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = self.column(name).ok_or_else(|| MissingColumn {
                table: self.name.clone(),
                column: name.to_string(),
            })?;
        }
        Ok(indices)
    }
}

/// Splits a multi-valued cell into its trimmed, non-empty parts.
///
/// # Examples
///
/// ```
/// use cookgraph_csv::reader::split_multi;
///
/// let parts: Vec<_> = split_multi("Recipe, Category,,", ',').collect();
/// assert_eq!(parts, ["Recipe", "Category"]);
/// ```
pub fn split_multi(cell: &str, delimiter: char) -> impl Iterator<Item = &str> {
    cell.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

fn table_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
