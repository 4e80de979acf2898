//! Non-fatal semantic checks over a loaded graph.
//!
//! Structural invariants (unique IDs, existing endpoints) are enforced while
//! loading. This pass checks the softer rules the dataset documents but does
//! not guarantee, because generated statistics nodes sit outside the strict
//! schema:
//!
//! - endpoint labels per relationship type (see [`endpoint_rule`])
//! - recipe-only fields (`difficulty`, `prepTime`, `cookTime`) on nodes
//!   that are neither recipes nor difficulty levels
//! - `stepNumber` on nodes that are not cooking steps
//! - `amount` / `unit` on relationships other than REQUIRES
//! - `step_order` on relationships other than CONTAINS_STEP / NEXT_STEP
//!
//! Every mismatch becomes a [`SemanticWarning`]; nothing is rejected.

use crate::domain::labels;
use crate::domain::{Node, NodeId, Relationship, RelationshipId, RelationshipType};
use crate::error::Endpoint;
use crate::graph::KnowledgeGraph;
use std::fmt;

/// Labels an endpoint may carry; an empty list accepts any node.
pub type LabelSet = &'static [&'static str];

/// Accepted labels at each end of a relationship type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRule {
    /// Labels accepted at `startNodeId`
    pub source: LabelSet,
    /// Labels accepted at `endNodeId`
    pub target: LabelSet,
}

const ANY: LabelSet = &[];
const RECIPE: LabelSet = &[labels::RECIPE];
const STEP: LabelSet = &[labels::COOKING_STEP];
const CATEGORY: LabelSet = &[labels::CATEGORY, labels::RECIPE_CATEGORY];
const INGREDIENT: LabelSet = &[labels::INGREDIENT];
const CONCEPT_TYPE: LabelSet = &[labels::CONCEPT_TYPE];
const DIFFICULTY: LabelSet = &[labels::DIFFICULTY_LEVEL];
const GROUPING: LabelSet = &[
    labels::CATEGORY,
    labels::RECIPE_CATEGORY,
    labels::ROOT,
    labels::CONCEPT_TYPE,
];

/// Returns the endpoint rule for `rel_type`.
#[must_use]
pub fn endpoint_rule(rel_type: RelationshipType) -> EndpointRule {
    let (source, target) = match rel_type {
        RelationshipType::Requires => (RECIPE, INGREDIENT),
        RelationshipType::ContainsStep => (RECIPE, STEP),
        RelationshipType::NextStep => (STEP, STEP),
        RelationshipType::BelongsTo => (ANY, GROUPING),
        RelationshipType::BelongsToCategory => (RECIPE, CATEGORY),
        RelationshipType::HasConceptType => (ANY, CONCEPT_TYPE),
        RelationshipType::Similar
        | RelationshipType::UsesSameTool
        | RelationshipType::UsesSameMethod => (RECIPE, RECIPE),
        RelationshipType::DifficultyLevel => (RECIPE, DIFFICULTY),
    };
    EndpointRule { source, target }
}

/// A non-fatal semantic mismatch found after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticWarning {
    /// An endpoint does not carry any of the labels its relationship type
    /// expects.
    EndpointLabelMismatch {
        /// The offending relationship
        relationship_id: RelationshipId,
        /// Its type
        rel_type: RelationshipType,
        /// Which end is mismatched
        endpoint: Endpoint,
        /// The node at that end
        node_id: NodeId,
        /// Labels the rule accepts
        expected: LabelSet,
        /// Labels the node carries
        found: Vec<String>,
    },

    /// A node sets a field that only applies to another label.
    NodeFieldOutOfScope {
        /// The offending node
        node_id: NodeId,
        /// Column name of the field
        field: &'static str,
        /// Labels the field applies to
        applies_to: LabelSet,
    },

    /// A relationship sets a field its type does not use.
    RelationshipFieldOutOfScope {
        /// The offending relationship
        relationship_id: RelationshipId,
        /// Its type
        rel_type: RelationshipType,
        /// Column name of the field
        field: &'static str,
    },
}

impl SemanticWarning {
    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EndpointLabelMismatch { .. } => "endpoint_label_mismatch",
            Self::NodeFieldOutOfScope { .. } => "node_field_out_of_scope",
            Self::RelationshipFieldOutOfScope { .. } => "relationship_field_out_of_scope",
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::EndpointLabelMismatch {
                relationship_id,
                rel_type,
                endpoint,
                node_id,
                expected,
                found,
            } => format!(
                "{rel_type} relationship '{relationship_id}': {endpoint} '{node_id}' has labels [{}], expected one of [{}]",
                found.join(", "),
                expected.join(", ")
            ),
            Self::NodeFieldOutOfScope {
                node_id,
                field,
                applies_to,
            } => format!(
                "node '{node_id}': field '{field}' only applies to [{}]",
                applies_to.join(", ")
            ),
            Self::RelationshipFieldOutOfScope {
                relationship_id,
                rel_type,
                field,
            } => format!(
                "{rel_type} relationship '{relationship_id}': field '{field}' does not apply to this type"
            ),
        }
    }
}

impl fmt::Display for SemanticWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Check type compatibility and field scope across the whole graph.
///
/// Node warnings come first, in table order, followed by relationship
/// warnings in table order. Never fails.
#[must_use]
pub fn validate_semantics(graph: &KnowledgeGraph) -> Vec<SemanticWarning> {
    let mut warnings = Vec::new();

    for node in graph.nodes() {
        check_node_fields(node, &mut warnings);
    }

    for relationship in graph.relationships() {
        check_endpoints(graph, relationship, &mut warnings);
        check_relationship_fields(relationship, &mut warnings);
    }

    tracing::debug!(warnings = warnings.len(), "Validated semantics");
    warnings
}

const RECIPE_FIELD_OWNERS: LabelSet = &[labels::RECIPE, labels::DIFFICULTY_LEVEL];

fn check_node_fields(node: &Node, warnings: &mut Vec<SemanticWarning>) {
    if node.has_recipe_fields() && !node.has_any_label(RECIPE_FIELD_OWNERS) {
        for (field, value) in [
            ("difficulty", &node.difficulty),
            ("prepTime", &node.prep_time),
            ("cookTime", &node.cook_time),
        ] {
            if value.is_some() {
                warnings.push(SemanticWarning::NodeFieldOutOfScope {
                    node_id: node.id.clone(),
                    field,
                    applies_to: RECIPE_FIELD_OWNERS,
                });
            }
        }
    }

    if node.step_number.is_some() && !node.has_label(labels::COOKING_STEP) {
        warnings.push(SemanticWarning::NodeFieldOutOfScope {
            node_id: node.id.clone(),
            field: "stepNumber",
            applies_to: STEP,
        });
    }
}

fn check_endpoints(
    graph: &KnowledgeGraph,
    relationship: &Relationship,
    warnings: &mut Vec<SemanticWarning>,
) {
    let rule = endpoint_rule(relationship.rel_type);

    for (endpoint, node_id, expected) in [
        (Endpoint::Start, &relationship.start, rule.source),
        (Endpoint::End, &relationship.end, rule.target),
    ] {
        if expected.is_empty() {
            continue;
        }
        // Endpoints are guaranteed by the loader; a miss here means the
        // graph was built from unchecked input and is reported elsewhere.
        let Some(node) = graph.node(node_id.as_str()) else {
            continue;
        };
        if !node.has_any_label(expected) {
            warnings.push(SemanticWarning::EndpointLabelMismatch {
                relationship_id: relationship.id.clone(),
                rel_type: relationship.rel_type,
                endpoint,
                node_id: node_id.clone(),
                expected,
                found: node.labels.iter().cloned().collect(),
            });
        }
    }
}

fn check_relationship_fields(relationship: &Relationship, warnings: &mut Vec<SemanticWarning>) {
    let rel_type = relationship.rel_type;
    let mut out_of_scope = |field| {
        warnings.push(SemanticWarning::RelationshipFieldOutOfScope {
            relationship_id: relationship.id.clone(),
            rel_type,
            field,
        });
    };

    if !rel_type.carries_quantity() {
        if relationship.amount.is_some() {
            out_of_scope("amount");
        }
        if relationship.unit.is_some() {
            out_of_scope("unit");
        }
    }
    if !rel_type.carries_step_order() && relationship.step_order.is_some() {
        out_of_scope("step_order");
    }
}
