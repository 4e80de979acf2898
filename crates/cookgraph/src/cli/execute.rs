//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::{bail, Result};
use std::path::Path;

use super::args::{EdgesArgs, ListArgs, NeighborsArgs, ShowArgs, StatsArgs, ValidateArgs};
use crate::app::App;
use crate::domain::{Node, Relationship, RelationshipType};
use crate::error::Error;
use crate::output::{self, OutputMode};

/// Execute the validate command.
///
/// Loads the dataset itself rather than through an [`App`] so a fatal load
/// error can be reported in JSON mode before it is returned.
pub async fn execute_validate(
    data_dir: &Path,
    config_path: Option<&Path>,
    args: &ValidateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let app = match App::from_directory(data_dir, config_path).await {
        Ok(app) => app,
        Err(Error::Load(err)) => {
            output::print_load_failure(&err, output_mode)?;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let graph = app.graph();
    output::print_validation(
        graph.node_count(),
        graph.relationship_count(),
        app.warnings(),
        output_mode,
    )?;

    if args.deny_warnings && !app.warnings().is_empty() {
        bail!(
            "dataset loaded with {} warning(s) and --deny-warnings is set",
            app.warnings().len()
        );
    }

    Ok(())
}

/// Execute the stats command
pub fn execute_stats(app: &App, _args: &StatsArgs, output_mode: OutputMode) -> Result<()> {
    output::print_schema(&app.graph().schema(), output_mode)?;
    Ok(())
}

/// Execute the show command
pub fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    let Some(node) = graph.node(&args.node_id) else {
        bail!("Node not found: {}", args.node_id);
    };

    output::print_node_details(
        node,
        &graph.outgoing(&args.node_id),
        &graph.incoming(&args.node_id),
        output_mode,
    )?;
    Ok(())
}

/// Execute the neighbors command.
///
/// Every edge is listed with the node at its far end, in table order, so a
/// node reached through two edges appears twice.
pub fn execute_neighbors(app: &App, args: &NeighborsArgs, output_mode: OutputMode) -> Result<()> {
    let graph = app.graph();
    if graph.node(&args.node_id).is_none() {
        bail!("Node not found: {}", args.node_id);
    }

    let rel_type = args.rel_type.map(RelationshipType::from);
    let edges = match (args.incoming, rel_type) {
        (false, None) => graph.outgoing(&args.node_id),
        (false, Some(t)) => graph.outgoing_of_type(&args.node_id, t),
        (true, None) => graph.incoming(&args.node_id),
        (true, Some(t)) => graph.incoming_of_type(&args.node_id, t),
    };

    let neighbors: Vec<(&Relationship, &Node)> = edges
        .into_iter()
        .filter_map(|edge| {
            let far = if args.incoming { &edge.start } else { &edge.end };
            graph.node(far.as_str()).map(|node| (edge, node))
        })
        .collect();

    output::print_neighbors(&neighbors, output_mode)?;
    Ok(())
}

/// Execute the list command
pub fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let mut nodes = app.graph().nodes_with_label(&args.label);
    nodes.truncate(args.limit);
    output::print_nodes(&nodes, output_mode)?;
    Ok(())
}

/// Execute the edges command
pub fn execute_edges(app: &App, args: &EdgesArgs, output_mode: OutputMode) -> Result<()> {
    let mut relationships = app.graph().relationships_of_type(args.rel_type.into());
    relationships.truncate(args.limit);
    output::print_relationships(&relationships, output_mode)?;
    Ok(())
}
