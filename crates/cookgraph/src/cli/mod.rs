//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `validate`: Load the dataset and report warnings
//! - `stats`: Show the schema summary
//! - `show`: Show a node and its relationships
//! - `neighbors`: Follow relationships from a node
//! - `list`: Enumerate nodes by label
//! - `edges`: Enumerate relationships by type
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--data-dir`: Directory holding `nodes.csv` and `relationships.csv`
//! - `--config`: Explicit configuration file instead of `<data-dir>/cookgraph.yaml`
//!
//! # Example
//!
//! ```bash
//! cookgraph --data-dir data validate --deny-warnings
//! cookgraph --data-dir data neighbors R001 --type requires
//! cookgraph --data-dir data --json list --label Recipe --limit 10
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{
    EdgesArgs, ListArgs, NeighborsArgs, ShowArgs, StatsArgs, ValidateArgs, DEFAULT_LIMIT,
};

// Re-export types
pub use types::RelationshipTypeArg;

// Re-export validators for external use
pub use validators::{validate_label, validate_node_id};

/// cookgraph - query a recipe knowledge graph exported as CSV
///
/// Loads `nodes.csv` and `relationships.csv`, enforces referential integrity
/// and reports semantic mismatches.
#[derive(Parser, Debug)]
#[command(name = "cookgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the dataset
    #[arg(short, long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Configuration file (defaults to `<data-dir>/cookgraph.yaml` if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load the dataset and report warnings
    ///
    /// Fails on the first structural error (malformed row, duplicate ID,
    /// dangling reference, unknown relationship type). Semantic mismatches
    /// are listed as warnings.
    Validate(ValidateArgs),

    /// Show the schema summary
    ///
    /// Per-label node counts, per-type relationship counts and the label
    /// combinations observed at each end.
    Stats(StatsArgs),

    /// Show a node with its incoming and outgoing relationships
    Show(ShowArgs),

    /// List the nodes connected to a node
    ///
    /// Follows outgoing relationships by default, incoming ones with
    /// `--incoming`.
    Neighbors(NeighborsArgs),

    /// List nodes carrying a label
    List(ListArgs),

    /// List relationships of a type
    Edges(EdgesArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let data_dir = self.data_dir.as_path();
        let config = self.config.as_deref();

        match &self.command {
            Some(Commands::Validate(args)) => {
                execute::execute_validate(data_dir, config, args, output_mode).await
            }
            Some(Commands::Stats(args)) => {
                let app = App::from_directory(data_dir, config).await?;
                execute::execute_stats(&app, args, output_mode)
            }
            Some(Commands::Show(args)) => {
                let app = App::from_directory(data_dir, config).await?;
                execute::execute_show(&app, args, output_mode)
            }
            Some(Commands::Neighbors(args)) => {
                let app = App::from_directory(data_dir, config).await?;
                execute::execute_neighbors(&app, args, output_mode)
            }
            Some(Commands::List(args)) => {
                let app = App::from_directory(data_dir, config).await?;
                execute::execute_list(&app, args, output_mode)
            }
            Some(Commands::Edges(args)) => {
                let app = App::from_directory(data_dir, config).await?;
                execute::execute_edges(&app, args, output_mode)
            }
            None => {
                println!("cookgraph recipe knowledge graph");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["cookgraph"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cookgraph",
            "stats",
            "--json",
            "--data-dir",
            "data",
            "--config",
            "alt.yaml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
        assert!(matches!(cli.command, Some(Commands::Stats(_))));
    }

    #[test]
    fn test_parse_validate_deny_warnings() {
        let cli = Cli::try_parse_from(["cookgraph", "validate", "--deny-warnings"]).unwrap();
        match cli.command {
            Some(Commands::Validate(args)) => assert!(args.deny_warnings),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["cookgraph", "show", " R001 "]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => assert_eq!(args.node_id, "R001"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_empty_id_fails() {
        assert!(Cli::try_parse_from(["cookgraph", "show", ""]).is_err());
    }

    #[test]
    fn test_parse_neighbors_with_type() {
        let cli =
            Cli::try_parse_from(["cookgraph", "neighbors", "I1", "--type", "REQUIRES", "--incoming"])
                .unwrap();
        match cli.command {
            Some(Commands::Neighbors(args)) => {
                assert_eq!(args.node_id, "I1");
                assert_eq!(args.rel_type, Some(RelationshipTypeArg::Requires));
                assert!(args.incoming);
            }
            _ => panic!("Expected Neighbors command"),
        }
    }

    #[test]
    fn test_parse_neighbors_defaults() {
        let cli = Cli::try_parse_from(["cookgraph", "neighbors", "R1"]).unwrap();
        match cli.command {
            Some(Commands::Neighbors(args)) => {
                assert!(args.rel_type.is_none());
                assert!(!args.incoming);
            }
            _ => panic!("Expected Neighbors command"),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["cookgraph", "list", "--label", "Recipe", "-n", "5"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.label, "Recipe");
                assert_eq!(args.limit, 5);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_requires_label() {
        assert!(Cli::try_parse_from(["cookgraph", "list"]).is_err());
    }

    #[test]
    fn test_parse_edges_default_limit() {
        let cli = Cli::try_parse_from(["cookgraph", "edges", "--type", "next-step"]).unwrap();
        match cli.command {
            Some(Commands::Edges(args)) => {
                assert_eq!(args.rel_type, RelationshipTypeArg::NextStep);
                assert_eq!(args.limit, DEFAULT_LIMIT);
            }
            _ => panic!("Expected Edges command"),
        }
    }

    #[test]
    fn test_parse_edges_unknown_type_fails() {
        assert!(Cli::try_parse_from(["cookgraph", "edges", "--type", "UNKNOWN_TYPE"]).is_err());
    }
}
