//! Warning types for non-fatal issues found while reading a table.
//!
//! A table can be read even when some rows are shaped oddly. Blank rows
//! are skipped and rows whose cell count disagrees with the header are kept
//! (missing trailing cells read as absent, extra cells are ignored). Each such
//! case is recorded as a [`Warning`] so callers can report it.
//!
//! # Examples
//!
//! ```
//! use cookgraph_csv::warning::Warning;
//!
//! let warning = Warning::RaggedRow {
//!     row: 3,
//!     expected: 7,
//!     found: 5,
//! };
//! assert_eq!(warning.row(), 3);
//! assert_eq!(warning.kind(), "ragged_row");
//! ```

/// A non-fatal warning that occurred while reading a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Every cell of the row was empty, so the row was skipped.
    BlankRow {
        /// The 1-based data row number.
        row: usize,
    },

    /// The row has a different number of cells than the header.
    ///
    /// The row is still returned; missing trailing cells read as absent.
    RaggedRow {
        /// The 1-based data row number.
        row: usize,
        /// Number of columns declared by the header.
        expected: usize,
        /// Number of cells found in the row.
        found: usize,
    },
}

impl Warning {
    /// Returns the data row number associated with this warning.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::BlankRow { row } | Self::RaggedRow { row, .. } => *row,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use cookgraph_csv::warning::Warning;
    ///
    /// let desc = Warning::BlankRow { row: 9 }.description();
    /// assert!(desc.contains("row 9"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::BlankRow { row } => format!("row {row}: blank row skipped"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => format!("row {row}: expected {expected} cells, found {found}"),
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlankRow { .. } => "blank_row",
            Self::RaggedRow { .. } => "ragged_row",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_row_reports_row_and_kind() {
        let warning = Warning::BlankRow { row: 4 };
        assert_eq!(warning.row(), 4);
        assert_eq!(warning.kind(), "blank_row");
    }

    #[test]
    fn description_formats_ragged_row() {
        let warning = Warning::RaggedRow {
            row: 2,
            expected: 14,
            found: 12,
        };
        let desc = warning.description();
        assert!(desc.contains("row 2"));
        assert!(desc.contains("expected 14"));
        assert!(desc.contains("found 12"));
    }

    #[test]
    fn display_matches_description() {
        let warning = Warning::BlankRow { row: 1 };
        assert_eq!(warning.to_string(), warning.description());
    }

    #[test]
    fn kind_enables_filtering_by_type() {
        let warnings = [
            Warning::BlankRow { row: 1 },
            Warning::RaggedRow {
                row: 2,
                expected: 3,
                found: 2,
            },
            Warning::BlankRow { row: 5 },
        ];

        let blank: Vec<_> = warnings
            .iter()
            .filter(|w| w.kind() == "blank_row")
            .collect();
        assert_eq!(blank.len(), 2);
    }
}
