//! Schema summary of a loaded graph.
//!
//! Reports what the data actually contains: how many nodes carry each label,
//! how many edges of each type exist, and which label combinations were
//! observed at either end of each type.

use super::KnowledgeGraph;
use crate::domain::RelationshipType;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of nodes carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    /// The label
    pub label: String,
    /// Nodes carrying it
    pub count: usize,
}

/// Summary of one relationship type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipTypeSummary {
    /// The relationship type
    #[serde(rename = "relationshipType")]
    pub rel_type: RelationshipType,
    /// Edges of this type
    pub count: usize,
    /// Observed `(source labels, target labels)` combinations with counts.
    pub patterns: Vec<EndpointPattern>,
}

/// One observed label combination at the two ends of an edge type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointPattern {
    /// Labels of the start node, joined with `:`
    pub source: String,
    /// Labels of the end node, joined with `:`
    pub target: String,
    /// Edges matching this combination
    pub count: usize,
}

/// Summary of the graph's labels and relationship types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSchema {
    /// Total nodes
    pub node_count: usize,
    /// Total relationships
    pub relationship_count: usize,
    /// Per-label node counts, sorted by label
    pub labels: Vec<LabelCount>,
    /// Per-type summaries, in declaration order, present types only
    pub relationship_types: Vec<RelationshipTypeSummary>,
}

impl GraphSchema {
    pub(super) fn from_graph(graph: &KnowledgeGraph) -> Self {
        let labels = graph
            .labels()
            .into_iter()
            .map(|label| LabelCount {
                label: label.to_string(),
                count: graph.nodes_with_label(label).len(),
            })
            .collect();

        let relationship_types = RelationshipType::ALL
            .into_iter()
            .filter_map(|rel_type| {
                let edges = graph.relationships_of_type(rel_type);
                if edges.is_empty() {
                    return None;
                }

                let mut patterns: BTreeMap<(String, String), usize> = BTreeMap::new();
                for edge in &edges {
                    let source = label_key(graph, edge.start.as_str());
                    let target = label_key(graph, edge.end.as_str());
                    *patterns.entry((source, target)).or_default() += 1;
                }

                Some(RelationshipTypeSummary {
                    rel_type,
                    count: edges.len(),
                    patterns: patterns
                        .into_iter()
                        .map(|((source, target), count)| EndpointPattern {
                            source,
                            target,
                            count,
                        })
                        .collect(),
                })
            })
            .collect();

        Self {
            node_count: graph.node_count(),
            relationship_count: graph.relationship_count(),
            labels,
            relationship_types,
        }
    }
}

fn label_key(graph: &KnowledgeGraph, id: &str) -> String {
    graph
        .node(id)
        .map(|node| {
            node.labels
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(":")
        })
        .unwrap_or_default()
}
