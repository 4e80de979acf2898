//! Error types for cookgraph operations.
//!
//! Errors are split by layer:
//!
//! - **`LoadError`**: a table header or row of the dataset violates a
//!   structural invariant. Always fatal; carries the table, the 1-based data
//!   row (0 for the header) and the field.
//! - **`ConfigError`**: the dataset configuration file is unusable.
//! - **`Error`**: the top-level type returned by dataset loading, wrapping
//!   the above plus table-reading and I/O failures.
//!
//! Type and field-scope mismatches are not errors; see
//! [`crate::validate::SemanticWarning`].

use crate::domain::{NodeId, RelationshipId};
use std::fmt;
use std::io;
use thiserror::Error;

/// The error type for cookgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A table could not be read.
    #[error(transparent)]
    Table(#[from] cookgraph_csv::Error),

    /// A row violated a structural invariant.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Which endpoint of a relationship an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The `startNodeId` column
    Start,
    /// The `endNodeId` column
    End,
}

impl Endpoint {
    /// The column name of this endpoint.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Start => "startNodeId",
            Self::End => "endNodeId",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A fatal dataset error pointing at the offending row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The header lacks a required column.
    #[error("{table}: header is missing required column '{column}'")]
    MissingColumn {
        /// Table name
        table: String,
        /// The absent column
        column: String,
    },

    /// A required field is absent or a typed field does not parse.
    #[error("{table}: row {row}: malformed field '{field}': {reason}")]
    MalformedRow {
        /// Table name
        table: String,
        /// 1-based data row
        row: usize,
        /// Column name of the bad field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Two node rows share a `nodeId`.
    #[error("{table}: row {row}: duplicate nodeId '{id}' (first defined at row {first_row})")]
    DuplicateNodeId {
        /// Table name
        table: String,
        /// 1-based data row of the second occurrence
        row: usize,
        /// The repeated ID
        id: NodeId,
        /// 1-based data row of the first occurrence
        first_row: usize,
    },

    /// Two relationship rows share a `relationshipId`.
    #[error(
        "{table}: row {row}: duplicate relationshipId '{id}' (first defined at row {first_row})"
    )]
    DuplicateRelationshipId {
        /// Table name
        table: String,
        /// 1-based data row of the second occurrence
        row: usize,
        /// The repeated ID
        id: RelationshipId,
        /// 1-based data row of the first occurrence
        first_row: usize,
    },

    /// A relationship endpoint names a node that does not exist.
    #[error("{table}: row {row}: {endpoint} '{node_id}' of relationship '{relationship_id}' does not exist")]
    DanglingReference {
        /// Table name
        table: String,
        /// 1-based data row
        row: usize,
        /// The relationship holding the reference
        relationship_id: RelationshipId,
        /// Which endpoint is dangling
        endpoint: Endpoint,
        /// The missing node ID
        node_id: NodeId,
    },

    /// `relationshipType` is not one of the recognized codes.
    #[error("{table}: row {row}: unknown relationshipType '{value}'")]
    UnknownRelationshipType {
        /// Table name
        table: String,
        /// 1-based data row
        row: usize,
        /// The unrecognized value
        value: String,
    },
}

impl LoadError {
    /// Returns the 1-based data row the error refers to, or 0 for the header.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::MissingColumn { .. } => 0,
            Self::MalformedRow { row, .. }
            | Self::DuplicateNodeId { row, .. }
            | Self::DuplicateRelationshipId { row, .. }
            | Self::DanglingReference { row, .. }
            | Self::UnknownRelationshipType { row, .. } => *row,
        }
    }

    /// Returns the name of the table the error refers to.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Self::MissingColumn { table, .. }
            | Self::MalformedRow { table, .. }
            | Self::DuplicateNodeId { table, .. }
            | Self::DuplicateRelationshipId { table, .. }
            | Self::DanglingReference { table, .. }
            | Self::UnknownRelationshipType { table, .. } => table.as_str(),
        }
    }

    /// Returns the column name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingColumn { column, .. } => column,
            Self::MalformedRow { field, .. } => field,
            Self::DuplicateNodeId { .. } => "nodeId",
            Self::DuplicateRelationshipId { .. } => "relationshipId",
            Self::DanglingReference { endpoint, .. } => endpoint.column(),
            Self::UnknownRelationshipType { .. } => "relationshipType",
        }
    }

    /// Returns a static string identifying the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => "missing_column",
            Self::MalformedRow { .. } => "malformed_row",
            Self::DuplicateNodeId { .. } => "duplicate_node_id",
            Self::DuplicateRelationshipId { .. } => "duplicate_relationship_id",
            Self::DanglingReference { .. } => "dangling_reference",
            Self::UnknownRelationshipType { .. } => "unknown_relationship_type",
        }
    }
}

impl From<cookgraph_csv::MissingColumn> for LoadError {
    fn from(err: cookgraph_csv::MissingColumn) -> Self {
        Self::MissingColumn {
            table: err.table,
            column: err.column,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file is not valid YAML for the expected shape.
    #[error("invalid configuration file {path}: {message}")]
    Parse {
        /// Path of the configuration file
        path: String,
        /// Parser message
        message: String,
    },

    /// The configured delimiter is not a single ASCII character.
    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(String),
}

/// A specialized Result type for cookgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_reference_message_names_row_endpoint_and_node() {
        let err = LoadError::DanglingReference {
            table: "relationships.csv".to_string(),
            row: 7,
            relationship_id: RelationshipId::new("REL7"),
            endpoint: Endpoint::Start,
            node_id: NodeId::new("X999"),
        };
        let msg = err.to_string();
        assert!(msg.contains("relationships.csv"));
        assert!(msg.contains("row 7"));
        assert!(msg.contains("startNodeId"));
        assert!(msg.contains("X999"));
        assert_eq!(err.field(), "startNodeId");
        assert_eq!(err.kind(), "dangling_reference");
    }

    #[test]
    fn accessors_cover_every_variant() {
        let err = LoadError::UnknownRelationshipType {
            table: "r".to_string(),
            row: 3,
            value: "UNKNOWN_TYPE".to_string(),
        };
        assert_eq!(err.row(), 3);
        assert_eq!(err.table(), "r");
        assert_eq!(err.field(), "relationshipType");
    }

    #[test]
    fn missing_column_points_at_header() {
        let err = LoadError::from(cookgraph_csv::MissingColumn {
            table: "nodes.csv".to_string(),
            column: "labels".to_string(),
        });
        assert_eq!(err.row(), 0);
        assert_eq!(err.table(), "nodes.csv");
        assert_eq!(err.field(), "labels");
        assert_eq!(err.kind(), "missing_column");
        assert_eq!(
            err.to_string(),
            "nodes.csv: header is missing required column 'labels'"
        );
    }

    #[test]
    fn load_error_converts_into_error() {
        let err: Error = LoadError::MalformedRow {
            table: "nodes.csv".to_string(),
            row: 1,
            field: "name",
            reason: "is missing".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Load(LoadError::MalformedRow { .. })));
        assert!(err.to_string().contains("'name'"));
    }
}
