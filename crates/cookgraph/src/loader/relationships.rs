//! Parsing of the relationships table and endpoint checking.

use super::{optional_u32, required, EdgeSet, NodeSet, ParsedRelationships};
use crate::domain::{NodeId, Relationship, RelationshipId, RelationshipType};
use crate::error::{Endpoint, LoadError};
use cookgraph_csv::{Row, Table};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Column positions of the relationships table, resolved once from the header.
struct RelationshipColumns {
    relationship_id: usize,
    relationship_type: usize,
    start_node_id: usize,
    end_node_id: usize,
    amount: Option<usize>,
    unit: Option<usize>,
    step_order: Option<usize>,
}

impl RelationshipColumns {
    fn resolve(table: &Table) -> Result<Self, LoadError> {
        let [relationship_id, relationship_type, start_node_id, end_node_id] = table
            .require_columns(["relationshipId", "relationshipType", "startNodeId", "endNodeId"])?;
        Ok(Self {
            relationship_id,
            relationship_type,
            start_node_id,
            end_node_id,
            amount: table.column("amount"),
            unit: table.column("unit"),
            step_order: table.column("step_order"),
        })
    }
}

/// Parse the relationships table without checking endpoints.
///
/// # Errors
///
/// - [`LoadError::MissingColumn`] when the header lacks `relationshipId`,
///   `relationshipType`, `startNodeId` or `endNodeId`.
/// - [`LoadError::MalformedRow`] when `relationshipId`, `relationshipType`,
///   `startNodeId` or `endNodeId` is absent, or `step_order` is not a
///   non-negative integer.
/// - [`LoadError::UnknownRelationshipType`] for an unrecognized type code.
/// - [`LoadError::DuplicateRelationshipId`] when two rows share an ID.
pub fn parse_relationships(table: &Table) -> Result<ParsedRelationships, LoadError> {
    let columns = RelationshipColumns::resolve(table)?;
    let mut relationships = Vec::with_capacity(table.rows().len());
    let mut rows = Vec::with_capacity(table.rows().len());
    let mut first_rows: HashMap<RelationshipId, usize> = HashMap::new();

    for row in table.rows() {
        let relationship = parse_relationship(table, row, &columns)?;

        match first_rows.entry(relationship.id.clone()) {
            Entry::Occupied(first) => {
                return Err(LoadError::DuplicateRelationshipId {
                    table: table.name().to_string(),
                    row: row.number(),
                    id: relationship.id,
                    first_row: *first.get(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(row.number());
            }
        }

        relationships.push(relationship);
        rows.push(row.number());
    }

    tracing::debug!(
        table = %table.name(),
        relationships = relationships.len(),
        "Parsed relationships"
    );

    Ok(ParsedRelationships {
        table: table.name().to_string(),
        relationships,
        rows,
    })
}

/// Verify that both endpoints of every relationship exist in `nodes`.
///
/// Relationships are checked in table order, start endpoint before end.
///
/// # Errors
///
/// Returns [`LoadError::DanglingReference`] for the first endpoint that
/// names a missing node.
pub fn check_references(
    parsed: ParsedRelationships,
    nodes: &NodeSet,
) -> Result<EdgeSet, LoadError> {
    for (relationship, &row) in parsed.relationships.iter().zip(&parsed.rows) {
        for (endpoint, node_id) in [
            (Endpoint::Start, &relationship.start),
            (Endpoint::End, &relationship.end),
        ] {
            if !nodes.contains(node_id.as_str()) {
                return Err(LoadError::DanglingReference {
                    table: parsed.table.clone(),
                    row,
                    relationship_id: relationship.id.clone(),
                    endpoint,
                    node_id: node_id.clone(),
                });
            }
        }
    }

    Ok(EdgeSet {
        relationships: parsed.relationships,
    })
}

/// Parse the relationships table and check every endpoint against `nodes`.
///
/// Row-level problems (see [`parse_relationships`]) are reported before
/// dangling references.
///
/// # Errors
///
/// Any error of [`parse_relationships`] or [`check_references`].
pub fn load_relationships(table: &Table, nodes: &NodeSet) -> Result<EdgeSet, LoadError> {
    check_references(parse_relationships(table)?, nodes)
}

fn parse_relationship(
    table: &Table,
    row: &Row,
    columns: &RelationshipColumns,
) -> Result<Relationship, LoadError> {
    let id = required(table, row, columns.relationship_id, "relationshipId")?;
    let type_code = required(table, row, columns.relationship_type, "relationshipType")?;
    let rel_type: RelationshipType =
        type_code
            .parse()
            .map_err(|_| LoadError::UnknownRelationshipType {
                table: table.name().to_string(),
                row: row.number(),
                value: type_code.to_string(),
            })?;
    let start = required(table, row, columns.start_node_id, "startNodeId")?;
    let end = required(table, row, columns.end_node_id, "endNodeId")?;

    Ok(Relationship {
        id: RelationshipId::new(id),
        rel_type,
        start: NodeId::new(start),
        end: NodeId::new(end),
        amount: row.get_opt(columns.amount).map(str::to_string),
        unit: row.get_opt(columns.unit).map(str::to_string),
        step_order: optional_u32(table, row, columns.step_order, "step_order")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_nodes;
    use cookgraph_csv::ReadOptions;

    const HEADER: &str = "relationshipId,relationshipType,startNodeId,endNodeId,amount,unit,step_order";

    fn read(name: &str, data: &str) -> Table {
        Table::from_reader(name, data.as_bytes(), &ReadOptions::default()).unwrap()
    }

    fn relationships(rows: &[&str]) -> Table {
        read("relationships.csv", &format!("{HEADER}\n{}\n", rows.join("\n")))
    }

    fn nodes() -> NodeSet {
        load_nodes(&read(
            "nodes.csv",
            "nodeId,name,labels\nR1,番茄炒蛋,Recipe\nI1,鸡蛋,Ingredient\nS1,打蛋,CookingStep\n",
        ))
        .unwrap()
    }

    #[test]
    fn loads_requires_with_quantity() {
        let edges =
            load_relationships(&relationships(&["E1,REQUIRES,R1,I1,2,个,"]), &nodes()).unwrap();
        let edge = edges.iter().next().unwrap();
        assert_eq!(edge.rel_type, RelationshipType::Requires);
        assert_eq!(edge.amount.as_deref(), Some("2"));
        assert_eq!(edge.unit.as_deref(), Some("个"));
        assert_eq!(edge.step_order, None);
    }

    #[test]
    fn loads_step_order() {
        let edges =
            load_relationships(&relationships(&["E1,CONTAINS_STEP,R1,S1,,,1"]), &nodes()).unwrap();
        assert_eq!(edges.iter().next().unwrap().step_order, Some(1));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = load_relationships(&relationships(&["E1,UNKNOWN_TYPE,R1,I1,,,"]), &nodes())
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::UnknownRelationshipType {
                table: "relationships.csv".to_string(),
                row: 1,
                value: "UNKNOWN_TYPE".to_string(),
            }
        );
    }

    #[test]
    fn dangling_start_is_rejected() {
        let err =
            load_relationships(&relationships(&["E1,REQUIRES,X999,I1,,,"]), &nodes()).unwrap_err();
        match err {
            LoadError::DanglingReference {
                endpoint, node_id, ..
            } => {
                assert_eq!(endpoint, Endpoint::Start);
                assert_eq!(node_id.as_str(), "X999");
            }
            other => panic!("Expected DanglingReference, got {other:?}"),
        }
    }

    #[test]
    fn dangling_end_is_rejected() {
        let err = load_relationships(
            &relationships(&["E1,REQUIRES,R1,I1,,,", "E2,REQUIRES,R1,I404,,,"]),
            &nodes(),
        )
        .unwrap_err();
        assert_eq!(err.row(), 2);
        assert_eq!(err.field(), "endNodeId");
    }

    #[test]
    fn duplicate_relationship_id_is_rejected() {
        let err = load_relationships(
            &relationships(&["E1,REQUIRES,R1,I1,,,", "E1,SIMILAR,R1,R1,,,"]),
            &nodes(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "duplicate_relationship_id");
        assert_eq!(err.row(), 2);
    }

    #[test]
    fn row_errors_are_reported_before_dangling_references() {
        let err = load_relationships(
            &relationships(&["E1,REQUIRES,X999,I1,,,", "E2,NOPE,R1,I1,,,"]),
            &nodes(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "unknown_relationship_type");
    }

    #[test]
    fn missing_endpoint_is_malformed() {
        let err =
            load_relationships(&relationships(&["E1,REQUIRES,R1,,,,"]), &nodes()).unwrap_err();
        assert_eq!(err.kind(), "malformed_row");
        assert_eq!(err.field(), "endNodeId");
    }

    #[test]
    fn header_only_table_without_endpoints_is_rejected() {
        let err = parse_relationships(&read(
            "relationships.csv",
            "relationshipId,relationshipType,startNodeId\n",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            LoadError::MissingColumn {
                table: "relationships.csv".to_string(),
                column: "endNodeId".to_string(),
            }
        );
    }

    #[test]
    fn parse_needs_no_nodes() {
        let parsed = parse_relationships(&relationships(&["E1,REQUIRES,X999,Y999,,,"])).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(check_references(parsed, &NodeSet::default()).is_err());
    }
}
