//! Property tests over generated datasets.
//!
//! Generated tables always satisfy the structural invariants, so every load
//! must succeed, be repeatable, and leave no edge pointing outside the
//! node index.

use cookgraph::dataset::load_tables;
use cookgraph::domain::RelationshipType;
use cookgraph_csv::{ReadOptions, Table};
use proptest::prelude::*;

const LABELS: &[&str] = &[
    "Recipe",
    "Ingredient",
    "CookingStep",
    "CookingMethod",
    "CookingTool",
    "DifficultyLevel",
    "RecipeCategory",
];

fn arb_labels() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(LABELS, 1..=3)
}

fn arb_rel_type() -> impl Strategy<Value = RelationshipType> {
    proptest::sample::select(RelationshipType::ALL.to_vec())
}

/// Node label sets plus edges as `(type, start index, end index)`.
fn arb_dataset() -> impl Strategy<Value = (Vec<Vec<&'static str>>, Vec<(RelationshipType, usize, usize)>)>
{
    proptest::collection::vec(arb_labels(), 1..20).prop_flat_map(|nodes| {
        let n = nodes.len();
        let edges = proptest::collection::vec((arb_rel_type(), 0..n, 0..n), 0..40);
        (Just(nodes), edges)
    })
}

fn render(
    nodes: &[Vec<&'static str>],
    edges: &[(RelationshipType, usize, usize)],
) -> (Table, Table) {
    let mut node_data = String::from("nodeId,name,labels\n");
    for (i, labels) in nodes.iter().enumerate() {
        node_data.push_str(&format!("N{i},节点{i},\"{}\"\n", labels.join(",")));
    }

    let mut edge_data =
        String::from("relationshipId,relationshipType,startNodeId,endNodeId\n");
    for (i, (rel_type, start, end)) in edges.iter().enumerate() {
        edge_data.push_str(&format!("E{i},{rel_type},N{start},N{end}\n"));
    }

    let options = ReadOptions::default();
    (
        Table::from_reader("nodes.csv", node_data.as_bytes(), &options).unwrap(),
        Table::from_reader("relationships.csv", edge_data.as_bytes(), &options).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reload_is_identical((nodes, edges) in arb_dataset(), parallel in any::<bool>()) {
        let (node_table, edge_table) = render(&nodes, &edges);
        let first = load_tables(&node_table, &edge_table, parallel).unwrap();
        let second = load_tables(&node_table, &edge_table, !parallel).unwrap();

        prop_assert_eq!(first.graph.nodes(), second.graph.nodes());
        prop_assert_eq!(first.graph.relationships(), second.graph.relationships());
        prop_assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn every_endpoint_is_indexed((nodes, edges) in arb_dataset()) {
        let (node_table, edge_table) = render(&nodes, &edges);
        let graph = load_tables(&node_table, &edge_table, true).unwrap().graph;

        prop_assert_eq!(graph.node_count(), nodes.len());
        prop_assert_eq!(graph.relationship_count(), edges.len());
        for relationship in graph.relationships() {
            prop_assert!(graph.node(relationship.start.as_str()).is_some());
            prop_assert!(graph.node(relationship.end.as_str()).is_some());
            prop_assert!(graph
                .outgoing(relationship.start.as_str())
                .iter()
                .any(|r| r.id == relationship.id));
            prop_assert!(graph
                .incoming(relationship.end.as_str())
                .iter()
                .any(|r| r.id == relationship.id));
        }
    }

    #[test]
    fn type_index_partitions_edges((nodes, edges) in arb_dataset()) {
        let (node_table, edge_table) = render(&nodes, &edges);
        let graph = load_tables(&node_table, &edge_table, false).unwrap().graph;

        let total: usize = RelationshipType::ALL
            .into_iter()
            .map(|t| graph.relationships_of_type(t).len())
            .sum();
        prop_assert_eq!(total, graph.relationship_count());

        let schema = graph.schema();
        let summarized: usize = schema.relationship_types.iter().map(|s| s.count).sum();
        prop_assert_eq!(summarized, graph.relationship_count());
    }
}
