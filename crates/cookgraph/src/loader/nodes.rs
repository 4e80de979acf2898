//! Parsing of the nodes table.

use super::{malformed, optional_u32, required, NodeSet};
use crate::domain::{Node, NodeId};
use crate::error::LoadError;
use cookgraph_csv::{split_multi, Row, Table, MULTI_VALUE_DELIMITER};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// Column positions of the nodes table, resolved once from the header.
struct NodeColumns {
    node_id: usize,
    name: usize,
    labels: usize,
    description: Option<usize>,
    category: Option<usize>,
    concept_type: Option<usize>,
    difficulty: Option<usize>,
    prep_time: Option<usize>,
    cook_time: Option<usize>,
    step_number: Option<usize>,
    methods: Option<usize>,
    tools: Option<usize>,
    synonyms: Option<usize>,
    file_path: Option<usize>,
}

impl NodeColumns {
    fn resolve(table: &Table) -> Result<Self, LoadError> {
        let [node_id, name, labels] = table.require_columns(["nodeId", "name", "labels"])?;
        Ok(Self {
            node_id,
            name,
            labels,
            description: table.column("description"),
            category: table.column("category"),
            concept_type: table.column("conceptType"),
            difficulty: table.column("difficulty"),
            prep_time: table.column("prepTime"),
            cook_time: table.column("cookTime"),
            step_number: table.column("stepNumber"),
            methods: table.column("methods"),
            tools: table.column("tools"),
            synonyms: table.column("synonyms"),
            file_path: table.column("filePath"),
        })
    }
}

/// Parse the nodes table into a [`NodeSet`].
///
/// Multi-valued cells (`labels`, `category`, `methods`, `tools`,
/// `synonyms`) are split on commas. Labels outside the documented
/// vocabulary are kept verbatim.
///
/// # Errors
///
/// - [`LoadError::MissingColumn`] when the header lacks `nodeId`, `name` or
///   `labels`, even if the table has no data rows.
/// - [`LoadError::MalformedRow`] when `nodeId`, `name` or `labels` is absent
///   (or `labels` holds no value), or `stepNumber` is not a non-negative
///   integer.
/// - [`LoadError::DuplicateNodeId`] when two rows share a `nodeId`.
pub fn load_nodes(table: &Table) -> Result<NodeSet, LoadError> {
    let columns = NodeColumns::resolve(table)?;
    let mut nodes = Vec::with_capacity(table.rows().len());
    let mut index = HashMap::with_capacity(table.rows().len());
    let mut first_rows: HashMap<NodeId, usize> = HashMap::new();

    for row in table.rows() {
        let node = parse_node(table, row, &columns)?;

        match first_rows.entry(node.id.clone()) {
            Entry::Occupied(first) => {
                return Err(LoadError::DuplicateNodeId {
                    table: table.name().to_string(),
                    row: row.number(),
                    id: node.id,
                    first_row: *first.get(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(row.number());
            }
        }

        index.insert(node.id.clone(), nodes.len());
        nodes.push(node);
    }

    tracing::debug!(table = %table.name(), nodes = nodes.len(), "Loaded nodes");

    Ok(NodeSet { nodes, index })
}

fn parse_node(table: &Table, row: &Row, columns: &NodeColumns) -> Result<Node, LoadError> {
    let id = required(table, row, columns.node_id, "nodeId")?;
    let name = required(table, row, columns.name, "name")?;
    let labels = multi(row, Some(columns.labels));
    if labels.is_empty() {
        // Distinguish "absent" from "only delimiters".
        required(table, row, columns.labels, "labels")?;
        return Err(malformed(table, row, "labels", "no label values"));
    }

    Ok(Node {
        id: NodeId::new(id),
        name: name.to_string(),
        labels,
        description: text(row, columns.description),
        category: multi(row, columns.category),
        concept_type: text(row, columns.concept_type),
        difficulty: text(row, columns.difficulty),
        prep_time: text(row, columns.prep_time),
        cook_time: text(row, columns.cook_time),
        step_number: optional_u32(table, row, columns.step_number, "stepNumber")?,
        methods: multi(row, columns.methods),
        tools: multi(row, columns.tools),
        synonyms: multi(row, columns.synonyms),
        file_path: text(row, columns.file_path),
    })
}

fn text(row: &Row, column: Option<usize>) -> Option<String> {
    row.get_opt(column).map(str::to_string)
}

fn multi(row: &Row, column: Option<usize>) -> BTreeSet<String> {
    row.get_opt(column)
        .map(|cell| {
            split_multi(cell, MULTI_VALUE_DELIMITER)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
