//! CLI argument structs for all commands.

use clap::Parser;

use super::types::RelationshipTypeArg;
use super::validators::{validate_label, validate_node_id};

/// Default number of results for listing commands
pub const DEFAULT_LIMIT: usize = 50;

/// Arguments for the `validate` command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Fail when the dataset loads with warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Node ID to display
    #[arg(value_parser = validate_node_id)]
    pub node_id: String,
}

/// Arguments for the `neighbors` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Node ID to start from
    #[arg(value_parser = validate_node_id)]
    pub node_id: String,

    /// Only follow relationships of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub rel_type: Option<RelationshipTypeArg>,

    /// Follow relationships pointing at the node instead of away from it
    #[arg(short, long)]
    pub incoming: bool,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Label to enumerate (e.g. Recipe, Ingredient)
    #[arg(short, long, value_parser = validate_label)]
    pub label: String,

    /// Maximum number of nodes to display
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Arguments for the `edges` command
#[derive(Parser, Debug, Clone)]
pub struct EdgesArgs {
    /// Relationship type to enumerate
    #[arg(short = 't', long = "type", value_enum)]
    pub rel_type: RelationshipTypeArg,

    /// Maximum number of relationships to display
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}
