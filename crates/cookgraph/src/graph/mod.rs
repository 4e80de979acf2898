//! Immutable in-memory knowledge graph.
//!
//! # Architecture
//!
//! - `Vec<Node>` / `Vec<Relationship>` hold the records in table order
//! - `petgraph::DiGraph` holds the adjacency in both directions
//! - `HashMap<NodeId, NodeIndex>` maps node IDs to graph nodes
//! - `HashMap<String, Vec<usize>>` indexes nodes by label
//! - `HashMap<RelationshipType, Vec<usize>>` indexes edges by type
//!
//! ## Edge Direction Convention
//!
//! Edges point from `startNodeId` to `endNodeId` exactly as in the source
//! table, so a REQUIRES edge goes recipe -> ingredient. "Upstream" queries
//! (which recipes require this ingredient?) walk incoming edges.
//!
//! ## Index Stability
//!
//! Nodes and edges are only ever added, in table order, while building.
//! A node's `NodeIndex::index()` is therefore its position in `nodes`, and an
//! edge's `EdgeIndex::index()` its position in `relationships`.
//!
//! # Thread Safety
//!
//! The graph has no interior mutability and no mutating methods once built;
//! it is `Send + Sync` and can be shared behind an `Arc` for concurrent reads.

mod schema;

pub use schema::{EndpointPattern, GraphSchema, LabelCount, RelationshipTypeSummary};

use crate::domain::{Node, NodeId, Relationship, RelationshipId, RelationshipType};
use crate::loader::{EdgeSet, NodeSet};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// The loaded, indexed, read-only knowledge graph.
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    nodes: Vec<Node>,
    relationships: Vec<Relationship>,
    /// Node weights are IDs; edge weights are relationship types.
    graph: DiGraph<NodeId, RelationshipType>,
    node_map: HashMap<NodeId, NodeIndex>,
    relationship_map: HashMap<RelationshipId, usize>,
    by_label: HashMap<String, Vec<usize>>,
    by_type: HashMap<RelationshipType, Vec<usize>>,
}

/// Index a validated node set and edge set into a [`KnowledgeGraph`].
///
/// The edge set is expected to have been checked against the same node set
/// (see [`crate::loader::check_references`]). An edge whose endpoint is
/// nevertheless missing is dropped and logged rather than indexed.
#[must_use]
pub fn build_graph(nodes: NodeSet, edges: EdgeSet) -> KnowledgeGraph {
    let nodes = nodes.into_nodes();
    let candidates = edges.into_relationships();

    let mut graph = DiGraph::with_capacity(nodes.len(), candidates.len());
    let mut node_map = HashMap::with_capacity(nodes.len());
    let mut by_label: HashMap<String, Vec<usize>> = HashMap::new();

    for (position, node) in nodes.iter().enumerate() {
        let index = graph.add_node(node.id.clone());
        node_map.insert(node.id.clone(), index);
        for label in &node.labels {
            by_label.entry(label.clone()).or_default().push(position);
        }
    }

    let mut relationships = Vec::with_capacity(candidates.len());
    let mut relationship_map = HashMap::with_capacity(candidates.len());
    let mut by_type: HashMap<RelationshipType, Vec<usize>> = HashMap::new();

    for relationship in candidates {
        let (Some(&from), Some(&to)) = (
            node_map.get(&relationship.start),
            node_map.get(&relationship.end),
        ) else {
            tracing::error!(
                relationship_id = %relationship.id,
                "Dropping relationship with an endpoint outside the node set"
            );
            continue;
        };

        let position = relationships.len();
        graph.add_edge(from, to, relationship.rel_type);
        relationship_map.insert(relationship.id.clone(), position);
        by_type
            .entry(relationship.rel_type)
            .or_default()
            .push(position);
        relationships.push(relationship);
    }

    tracing::debug!(
        nodes = nodes.len(),
        relationships = relationships.len(),
        labels = by_label.len(),
        "Built knowledge graph"
    );

    KnowledgeGraph {
        nodes,
        relationships,
        graph,
        node_map,
        relationship_map,
        by_label,
        by_type,
    }
}

impl KnowledgeGraph {
    /// Returns the node with `id`, if any.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_map.get(id).map(|index| &self.nodes[index.index()])
    }

    /// Returns the relationship with `id`, if any.
    #[must_use]
    pub fn relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationship_map
            .get(id)
            .map(|&position| &self.relationships[position])
    }

    /// All nodes, in table order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All relationships, in table order.
    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships.
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Every label carried by at least one node, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.by_label.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// All nodes carrying `label`, in table order, whatever other labels
    /// they carry.
    #[must_use]
    pub fn nodes_with_label(&self, label: &str) -> Vec<&Node> {
        self.by_label
            .get(label)
            .map(|positions| positions.iter().map(|&p| &self.nodes[p]).collect())
            .unwrap_or_default()
    }

    /// All relationships of type `rel_type`, in table order.
    #[must_use]
    pub fn relationships_of_type(&self, rel_type: RelationshipType) -> Vec<&Relationship> {
        self.by_type
            .get(&rel_type)
            .map(|positions| positions.iter().map(|&p| &self.relationships[p]).collect())
            .unwrap_or_default()
    }

    /// Relationships starting at `id`, in table order.
    ///
    /// Returns an empty list for an unknown node.
    #[must_use]
    pub fn outgoing(&self, id: &str) -> Vec<&Relationship> {
        self.edges(id, Direction::Outgoing, None)
    }

    /// Relationships ending at `id`, in table order.
    #[must_use]
    pub fn incoming(&self, id: &str) -> Vec<&Relationship> {
        self.edges(id, Direction::Incoming, None)
    }

    /// Relationships of type `rel_type` starting at `id`.
    #[must_use]
    pub fn outgoing_of_type(&self, id: &str, rel_type: RelationshipType) -> Vec<&Relationship> {
        self.edges(id, Direction::Outgoing, Some(rel_type))
    }

    /// Relationships of type `rel_type` ending at `id`.
    #[must_use]
    pub fn incoming_of_type(&self, id: &str, rel_type: RelationshipType) -> Vec<&Relationship> {
        self.edges(id, Direction::Incoming, Some(rel_type))
    }

    /// Distinct target nodes reached from `id` through `rel_type` edges.
    ///
    /// For a recipe and [`RelationshipType::Requires`] these are its
    /// ingredients.
    #[must_use]
    pub fn neighbors(&self, id: &str, rel_type: RelationshipType) -> Vec<&Node> {
        self.endpoints(self.outgoing_of_type(id, rel_type), |r| &r.end)
    }

    /// Distinct source nodes pointing at `id` through `rel_type` edges.
    ///
    /// For an ingredient and [`RelationshipType::Requires`] these are the
    /// recipes that require it.
    #[must_use]
    pub fn predecessors(&self, id: &str, rel_type: RelationshipType) -> Vec<&Node> {
        self.endpoints(self.incoming_of_type(id, rel_type), |r| &r.start)
    }

    /// Summarize labels, relationship types and observed endpoint labels.
    #[must_use]
    pub fn schema(&self) -> GraphSchema {
        GraphSchema::from_graph(self)
    }

    fn edges(
        &self,
        id: &str,
        direction: Direction,
        rel_type: Option<RelationshipType>,
    ) -> Vec<&Relationship> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };

        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(index, direction)
            .filter(|edge| rel_type.is_none_or(|t| *edge.weight() == t))
            .map(|edge| edge.id().index())
            .collect();
        // petgraph walks adjacency lists newest-first.
        positions.sort_unstable();

        positions
            .into_iter()
            .map(|position| &self.relationships[position])
            .collect()
    }

    fn endpoints<'g>(
        &'g self,
        relationships: Vec<&'g Relationship>,
        endpoint: impl Fn(&'g Relationship) -> &'g NodeId,
    ) -> Vec<&'g Node> {
        let mut seen = HashSet::new();
        relationships
            .into_iter()
            .map(endpoint)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.node(id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_nodes, load_relationships};
    use cookgraph_csv::{ReadOptions, Table};

    fn graph(nodes: &str, relationships: &str) -> KnowledgeGraph {
        let options = ReadOptions::default();
        let nodes = load_nodes(&Table::from_reader("nodes.csv", nodes.as_bytes(), &options).unwrap())
            .unwrap();
        let edges = load_relationships(
            &Table::from_reader("relationships.csv", relationships.as_bytes(), &options).unwrap(),
            &nodes,
        )
        .unwrap();
        build_graph(nodes, edges)
    }

    fn sample() -> KnowledgeGraph {
        graph(
            "nodeId,name,labels\n\
             R1,番茄炒蛋,Recipe\n\
             R2,蛋炒饭,Recipe\n\
             I1,鸡蛋,Ingredient\n\
             I2,番茄,Ingredient\n\
             S1,打蛋,CookingStep\n\
             S2,下锅,CookingStep\n",
            "relationshipId,relationshipType,startNodeId,endNodeId,step_order\n\
             E1,REQUIRES,R1,I1,\n\
             E2,REQUIRES,R1,I2,\n\
             E3,REQUIRES,R2,I1,\n\
             E4,CONTAINS_STEP,R1,S1,1\n\
             E5,CONTAINS_STEP,R1,S2,2\n\
             E6,NEXT_STEP,S1,S2,\n\
             E7,SIMILAR,R1,R2,\n",
        )
    }

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn outgoing_edges_keep_table_order() {
        let g = sample();
        let ids: Vec<_> = g.outgoing("R1").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E4", "E5", "E7"]);
    }

    #[test]
    fn neighbors_filter_by_type() {
        let g = sample();
        assert_eq!(ids(&g.neighbors("R1", RelationshipType::Requires)), ["I1", "I2"]);
        assert_eq!(ids(&g.neighbors("R1", RelationshipType::Similar)), ["R2"]);
        assert!(g.neighbors("R1", RelationshipType::DifficultyLevel).is_empty());
    }

    #[test]
    fn predecessors_answer_upstream_queries() {
        let g = sample();
        assert_eq!(ids(&g.predecessors("I1", RelationshipType::Requires)), ["R1", "R2"]);
        assert_eq!(g.incoming("S2").len(), 2);
    }

    #[test]
    fn neighbors_are_distinct() {
        let g = graph(
            "nodeId,name,labels\nR1,a,Recipe\nR2,b,Recipe\n",
            "relationshipId,relationshipType,startNodeId,endNodeId\n\
             E1,SIMILAR,R1,R2\n\
             E2,SIMILAR,R1,R2\n",
        );
        assert_eq!(g.outgoing_of_type("R1", RelationshipType::Similar).len(), 2);
        assert_eq!(ids(&g.neighbors("R1", RelationshipType::Similar)), ["R2"]);
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let g = sample();
        assert!(g.node("nope").is_none());
        assert!(g.outgoing("nope").is_empty());
        assert!(g.predecessors("nope", RelationshipType::Requires).is_empty());
    }

    #[test]
    fn relationships_of_type_and_lookup() {
        let g = sample();
        assert_eq!(g.relationships_of_type(RelationshipType::Requires).len(), 3);
        assert!(g.relationships_of_type(RelationshipType::UsesSameTool).is_empty());
        assert_eq!(
            g.relationship("E6").map(|r| r.rel_type),
            Some(RelationshipType::NextStep)
        );
    }

    #[test]
    fn labels_are_sorted() {
        let g = sample();
        assert_eq!(g.labels(), ["CookingStep", "Ingredient", "Recipe"]);
    }

    #[test]
    fn graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KnowledgeGraph>();
    }
}
