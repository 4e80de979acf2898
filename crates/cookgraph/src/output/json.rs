//! JSON views of command results.

use crate::dataset::LoadWarning;
use crate::domain::{Node, Relationship};
use crate::error::LoadError;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
pub(super) struct WarningJson {
    kind: &'static str,
    message: String,
}

impl From<&LoadWarning> for WarningJson {
    fn from(warning: &LoadWarning) -> Self {
        Self {
            kind: warning.kind(),
            message: warning.to_string(),
        }
    }
}

#[derive(Serialize)]
pub(super) struct LoadErrorJson<'a> {
    kind: &'static str,
    table: &'a str,
    row: usize,
    field: &'a str,
    message: String,
}

impl<'a> From<&'a LoadError> for LoadErrorJson<'a> {
    fn from(err: &'a LoadError) -> Self {
        Self {
            kind: err.kind(),
            table: err.table(),
            row: err.row(),
            field: err.field(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValidationJson<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relationship_count: Option<usize>,
    warnings: Vec<WarningJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<LoadErrorJson<'a>>,
}

#[derive(Serialize)]
struct NodeDetailsJson<'a> {
    node: &'a Node,
    outgoing: &'a [&'a Relationship],
    incoming: &'a [&'a Relationship],
}

#[derive(Serialize)]
struct NeighborJson<'a> {
    relationship: &'a Relationship,
    node: &'a Node,
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

pub(super) fn print_validation_json<W: Write>(
    w: &mut W,
    counts: Option<(usize, usize)>,
    warnings: &[LoadWarning],
    error: Option<&LoadError>,
) -> io::Result<()> {
    write_json(
        w,
        &ValidationJson {
            valid: error.is_none(),
            node_count: counts.map(|(nodes, _)| nodes),
            relationship_count: counts.map(|(_, relationships)| relationships),
            warnings: warnings.iter().map(WarningJson::from).collect(),
            error: error.map(LoadErrorJson::from),
        },
    )
}

pub(super) fn print_node_details_json<W: Write>(
    w: &mut W,
    node: &Node,
    outgoing: &[&Relationship],
    incoming: &[&Relationship],
) -> io::Result<()> {
    write_json(
        w,
        &NodeDetailsJson {
            node,
            outgoing,
            incoming,
        },
    )
}

pub(super) fn print_neighbors_json<W: Write>(
    w: &mut W,
    neighbors: &[(&Relationship, &Node)],
) -> io::Result<()> {
    let view: Vec<NeighborJson<'_>> = neighbors
        .iter()
        .map(|&(relationship, node)| NeighborJson { relationship, node })
        .collect();
    write_json(w, &view)
}

pub(super) fn print_value_json<W: Write, T: Serialize + ?Sized>(
    w: &mut W,
    value: &T,
) -> io::Result<()> {
    write_json(w, &value)
}
