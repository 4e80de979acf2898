//! End-to-end dataset loading.
//!
//! [`load_dataset`] reads both tables from a data directory and runs the
//! full pipeline:
//!
//! 1. Read `nodes.csv` and `relationships.csv` concurrently.
//! 2. Parse nodes and relationships, on two rayon threads when
//!    [`DatasetConfig::parallel`] is set.
//! 3. Check every relationship endpoint against the node set.
//! 4. Build the [`KnowledgeGraph`].
//! 5. Run [`validate_semantics`].
//!
//! The first fatal error aborts the load. Table and semantic warnings are
//! collected into [`LoadedGraph::warnings`].

use crate::config::DatasetConfig;
use crate::error::{LoadError, Result};
use crate::graph::{build_graph, KnowledgeGraph};
use crate::loader::{check_references, load_nodes, parse_relationships};
use crate::validate::{validate_semantics, SemanticWarning};
use cookgraph_csv::Table;
use std::fmt;
use std::path::Path;

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A raw table problem (blank or ragged row).
    Table {
        /// Table the row belongs to
        table: String,
        /// The underlying warning
        warning: cookgraph_csv::Warning,
    },

    /// A type or field-scope mismatch in the loaded graph.
    Semantic(SemanticWarning),
}

impl LoadWarning {
    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Table { warning, .. } => warning.kind(),
            Self::Semantic(warning) => warning.kind(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { table, warning } => write!(f, "{table}: {warning}"),
            Self::Semantic(warning) => write!(f, "{warning}"),
        }
    }
}

impl From<SemanticWarning> for LoadWarning {
    fn from(warning: SemanticWarning) -> Self {
        Self::Semantic(warning)
    }
}

/// A successfully loaded graph with every warning raised along the way.
#[derive(Debug)]
pub struct LoadedGraph {
    /// The validated graph
    pub graph: KnowledgeGraph,
    /// Table warnings (nodes table first) followed by semantic warnings
    pub warnings: Vec<LoadWarning>,
}

impl LoadedGraph {
    /// Returns `true` if loading raised no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Load a graph from two already-read tables.
///
/// With `parallel`, the node parse and the relationship parse run on
/// separate rayon threads. Either way, row errors in the relationships
/// table win over dangling references, and a nodes-table error wins over
/// any relationships-table error.
///
/// # Errors
///
/// The first [`LoadError`] in the order above.
pub fn load_tables(
    nodes: &Table,
    relationships: &Table,
    parallel: bool,
) -> std::result::Result<LoadedGraph, LoadError> {
    let (node_set, parsed) = if parallel {
        rayon::join(|| load_nodes(nodes), || parse_relationships(relationships))
    } else {
        (load_nodes(nodes), parse_relationships(relationships))
    };
    let node_set = node_set?;
    let edge_set = check_references(parsed?, &node_set)?;

    let graph = build_graph(node_set, edge_set);

    let mut warnings: Vec<LoadWarning> = [nodes, relationships]
        .into_iter()
        .flat_map(|table| {
            table.warnings().iter().map(|warning| LoadWarning::Table {
                table: table.name().to_string(),
                warning: warning.clone(),
            })
        })
        .collect();

    for warning in validate_semantics(&graph) {
        tracing::warn!(kind = warning.kind(), "{warning}");
        warnings.push(warning.into());
    }

    tracing::info!(
        nodes = graph.node_count(),
        relationships = graph.relationship_count(),
        warnings = warnings.len(),
        "Loaded knowledge graph"
    );

    Ok(LoadedGraph { graph, warnings })
}

/// Read and load the dataset in `dir` as described by `config`.
///
/// # Errors
///
/// - [`crate::error::Error::Config`] for an invalid delimiter.
/// - [`crate::error::Error::Table`] when either file cannot be read or
///   tokenized.
/// - [`crate::error::Error::Load`] for the first structural violation.
pub async fn load_dataset(dir: &Path, config: &DatasetConfig) -> Result<LoadedGraph> {
    let options = config.read_options()?;
    let nodes_path = config.nodes_path(dir);
    let relationships_path = config.relationships_path(dir);

    tracing::debug!(
        nodes = %nodes_path.display(),
        relationships = %relationships_path.display(),
        "Reading dataset"
    );

    let (nodes, relationships) = tokio::try_join!(
        Table::read(&nodes_path, &options),
        Table::read(&relationships_path, &options),
    )?;

    Ok(load_tables(&nodes, &relationships, config.parallel)?)
}
