//! Row-level loading of the nodes and relationships tables.
//!
//! Loading is split into three passes so that the expensive row parsing of
//! both tables can happen independently:
//!
//! 1. [`load_nodes`] parses the nodes table into a [`NodeSet`].
//! 2. [`parse_relationships`] parses the relationships table without looking
//!    at nodes, producing [`ParsedRelationships`].
//! 3. [`check_references`] verifies every endpoint against the node set and
//!    yields the final [`EdgeSet`].
//!
//! [`load_relationships`] chains passes 2 and 3. Both parse passes check
//! the header for their required columns before looking at any row, so a
//! header-only table still fails on a missing column. Every pass stops at
//! the first offending row and reports it as a [`LoadError`]; rows are never
//! skipped.

mod nodes;
mod relationships;

use crate::domain::{Node, NodeId, Relationship};
use cookgraph_csv::{Row, Table};
use std::collections::HashMap;

pub use nodes::load_nodes;
pub use relationships::{check_references, load_relationships, parse_relationships};

use crate::error::LoadError;

/// The validated set of nodes, in table order, indexed by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl NodeSet {
    /// Returns `true` if a node with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the node with `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Consumes the set, returning the nodes in table order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

/// Relationships that passed row-level parsing but whose endpoints have not
/// been checked against a node set yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelationships {
    table: String,
    relationships: Vec<Relationship>,
    /// Data row number of each relationship, parallel to `relationships`.
    rows: Vec<usize>,
}

impl ParsedRelationships {
    /// Returns the number of parsed relationships.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Returns `true` if no relationships were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

/// The validated set of relationships, in table order.
///
/// Every endpoint referenced here exists in the [`NodeSet`] the set was
/// checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    relationships: Vec<Relationship>,
}

impl EdgeSet {
    /// Returns the number of relationships.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Returns `true` if there are no relationships.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Iterates over the relationships in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// Consumes the set, returning the relationships in table order.
    #[must_use]
    pub fn into_relationships(self) -> Vec<Relationship> {
        self.relationships
    }
}

/// Returns the trimmed value of a required field or a `MalformedRow` error.
fn required<'r>(
    table: &Table,
    row: &'r Row,
    column: usize,
    field: &'static str,
) -> Result<&'r str, LoadError> {
    row.get(column)
        .ok_or_else(|| malformed(table, row, field, "value is missing"))
}

/// Parses an optional non-negative integer field.
fn optional_u32(
    table: &Table,
    row: &Row,
    column: Option<usize>,
    field: &'static str,
) -> Result<Option<u32>, LoadError> {
    row.get_opt(column)
        .map(|value| {
            parse_integer(value).ok_or_else(|| {
                malformed(
                    table,
                    row,
                    field,
                    format!("'{value}' is not a non-negative integer"),
                )
            })
        })
        .transpose()
}

/// Accepts plain integers and integral floats such as `3.0`, which
/// spreadsheet exports produce for numeric columns.
fn parse_integer(value: &str) -> Option<u32> {
    if let Ok(n) = value.parse::<u32>() {
        return Some(n);
    }
    let (whole, fraction) = value.split_once('.')?;
    if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
        whole.parse().ok()
    } else {
        None
    }
}

fn malformed(table: &Table, row: &Row, field: &'static str, reason: impl Into<String>) -> LoadError {
    LoadError::MalformedRow {
        table: table.name().to_string(),
        row: row.number(),
        field,
        reason: reason.into(),
    }
}
