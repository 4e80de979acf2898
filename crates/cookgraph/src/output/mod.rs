//! Output formatting for CLI commands.
//!
//! Every printer comes in a text flavor (colored unless disabled) and a
//! JSON flavor selected by the global `--json` flag.
//!
//! Submodules:
//! - [`color`]: semantic color helpers
//! - `json`: JSON views for programmatic output

pub mod color;
mod json;

use crate::dataset::LoadWarning;
use crate::domain::{Node, Relationship};
use crate::error::LoadError;
use crate::graph::GraphSchema;
use std::env;
use std::io::{self, Write};

pub use color::{error, success, warning};

use color::{bold, colorize_id, colorize_labels, colorize_type, dimmed};
use json::{
    print_neighbors_json, print_node_details_json, print_validation_json, print_value_json,
};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `COOKGRAPH_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_colors = env::var("NO_COLOR").is_err()
            && match env::var("COOKGRAPH_COLOR") {
                Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
                Ok(v) if v.is_empty() || v == "1" || v.eq_ignore_ascii_case("true") => true,
                Ok(v) => {
                    tracing::warn!(
                        env_var = "COOKGRAPH_COLOR",
                        value = %v,
                        "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                    );
                    true
                }
                Err(_) => true,
            };

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print the outcome of a successful validation.
pub fn print_validation(
    node_count: usize,
    relationship_count: usize,
    warnings: &[LoadWarning],
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_validation_text(
            &mut handle,
            node_count,
            relationship_count,
            warnings,
            &config,
        ),
        OutputMode::Json => print_validation_json(
            &mut handle,
            Some((node_count, relationship_count)),
            warnings,
            None,
        ),
    }
}

/// Print a fatal load error found during validation.
///
/// Text mode leaves the message to the caller's error path; only JSON mode
/// writes a report to stdout.
pub fn print_load_failure(err: &LoadError, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Text => Ok(()),
        OutputMode::Json => print_validation_json(&mut io::stdout().lock(), None, &[], Some(err)),
    }
}

/// Print the schema summary (for stats command)
pub fn print_schema(schema: &GraphSchema, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_schema_text(&mut handle, schema, &config),
        OutputMode::Json => print_value_json(&mut handle, schema),
    }
}

/// Print a node with its edges (for show command)
pub fn print_node_details(
    node: &Node,
    outgoing: &[&Relationship],
    incoming: &[&Relationship],
    mode: OutputMode,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => {
            print_node_details_text(&mut handle, node, outgoing, incoming, &config)
        }
        OutputMode::Json => print_node_details_json(&mut handle, node, outgoing, incoming),
    }
}

/// Print neighbor nodes together with the edge leading to each.
pub fn print_neighbors(neighbors: &[(&Relationship, &Node)], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_neighbors_text(&mut handle, neighbors, &config),
        OutputMode::Json => print_neighbors_json(&mut handle, neighbors),
    }
}

/// Print a list of nodes
pub fn print_nodes(nodes: &[&Node], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_nodes_text(&mut handle, nodes, &config),
        OutputMode::Json => print_value_json(&mut handle, nodes),
    }
}

/// Print a list of relationships
pub fn print_relationships(relationships: &[&Relationship], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_relationships_text(&mut handle, relationships, &config),
        OutputMode::Json => print_value_json(&mut handle, relationships),
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_validation_text<W: Write>(
    w: &mut W,
    node_count: usize,
    relationship_count: usize,
    warnings: &[LoadWarning],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} Loaded {node_count} node(s) and {relationship_count} relationship(s)",
        success("✓", config)
    )?;

    if warnings.is_empty() {
        return Ok(());
    }

    writeln!(
        w,
        "{}",
        warning(&format!("{} warning(s):", warnings.len()), config)
    )?;
    for item in warnings {
        writeln!(w, "  {} {item}", dimmed(&format!("[{}]", item.kind()), config))?;
    }
    Ok(())
}

fn print_schema_text<W: Write>(
    w: &mut W,
    schema: &GraphSchema,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} nodes, {} relationships",
        bold("Graph:", config),
        schema.node_count,
        schema.relationship_count
    )?;

    writeln!(w)?;
    writeln!(w, "{}", bold("Labels:", config))?;
    for entry in &schema.labels {
        writeln!(
            w,
            "  {:<20} {}",
            colorize_labels([&entry.label], config),
            entry.count
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}", bold("Relationship types:", config))?;
    for summary in &schema.relationship_types {
        writeln!(
            w,
            "  {:<20} {}",
            colorize_type(summary.rel_type, config),
            summary.count
        )?;
        for pattern in &summary.patterns {
            writeln!(
                w,
                "    {} {} {} {}",
                pattern.source,
                dimmed("->", config),
                pattern.target,
                dimmed(&format!("({})", pattern.count), config)
            )?;
        }
    }
    Ok(())
}

fn print_node_line<W: Write>(w: &mut W, node: &Node, config: &OutputConfig) -> io::Result<()> {
    writeln!(
        w,
        "{} {} {}",
        colorize_id(node.id.as_str(), config),
        colorize_labels(&node.labels, config),
        node.name
    )
}

fn print_relationship_line<W: Write>(
    w: &mut W,
    relationship: &Relationship,
    config: &OutputConfig,
) -> io::Result<()> {
    write!(
        w,
        "{} {} {} {}",
        colorize_id(relationship.id.as_str(), config),
        colorize_id(relationship.start.as_str(), config),
        dimmed(&format!("-[{}]->", relationship.rel_type), config),
        colorize_id(relationship.end.as_str(), config),
    )?;
    let attributes = relationship_attributes(relationship);
    if attributes.is_empty() {
        writeln!(w)
    } else {
        writeln!(w, " {attributes}")
    }
}

/// `amount unit` for REQUIRES, `#order` for step edges, otherwise empty.
fn relationship_attributes(relationship: &Relationship) -> String {
    let mut parts = Vec::new();
    match (&relationship.amount, &relationship.unit) {
        (Some(amount), Some(unit)) => parts.push(format!("{amount}{unit}")),
        (Some(value), None) | (None, Some(value)) => parts.push(value.clone()),
        (None, None) => {}
    }
    if let Some(order) = relationship.step_order {
        parts.push(format!("#{order}"));
    }
    parts.join(" ")
}

fn print_node_details_text<W: Write>(
    w: &mut W,
    node: &Node,
    outgoing: &[&Relationship],
    incoming: &[&Relationship],
    config: &OutputConfig,
) -> io::Result<()> {
    print_node_line(w, node, config)?;

    let single = [
        ("Description:", node.description.as_deref()),
        ("Concept type:", node.concept_type.as_deref()),
        ("Difficulty:", node.difficulty.as_deref()),
        ("Prep time:", node.prep_time.as_deref()),
        ("Cook time:", node.cook_time.as_deref()),
        ("File:", node.file_path.as_deref()),
    ];
    for (name, value) in single {
        if let Some(value) = value {
            writeln!(w, "  {} {value}", dimmed(name, config))?;
        }
    }
    if let Some(step) = node.step_number {
        writeln!(w, "  {} {step}", dimmed("Step:", config))?;
    }

    let multi = [
        ("Category:", &node.category),
        ("Methods:", &node.methods),
        ("Tools:", &node.tools),
        ("Synonyms:", &node.synonyms),
    ];
    for (name, values) in multi {
        if !values.is_empty() {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            writeln!(w, "  {} {}", dimmed(name, config), joined.join(", "))?;
        }
    }

    for (title, edges) in [("Outgoing", outgoing), ("Incoming", incoming)] {
        if edges.is_empty() {
            continue;
        }
        writeln!(w)?;
        writeln!(w, "{}", bold(&format!("{title} ({}):", edges.len()), config))?;
        for edge in edges {
            write!(w, "  ")?;
            print_relationship_line(w, edge, config)?;
        }
    }
    Ok(())
}

fn print_neighbors_text<W: Write>(
    w: &mut W,
    neighbors: &[(&Relationship, &Node)],
    config: &OutputConfig,
) -> io::Result<()> {
    if neighbors.is_empty() {
        writeln!(w, "No neighbors found.")?;
        return Ok(());
    }

    for (relationship, node) in neighbors {
        write!(
            w,
            "{} ",
            dimmed(&format!("[{}]", relationship.rel_type), config)
        )?;
        print_node_line(w, node, config)?;
    }
    Ok(())
}

fn print_nodes_text<W: Write>(w: &mut W, nodes: &[&Node], config: &OutputConfig) -> io::Result<()> {
    if nodes.is_empty() {
        writeln!(w, "No nodes found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} node(s):", nodes.len())?;
    writeln!(w)?;
    for node in nodes {
        print_node_line(w, node, config)?;
    }
    Ok(())
}

fn print_relationships_text<W: Write>(
    w: &mut W,
    relationships: &[&Relationship],
    config: &OutputConfig,
) -> io::Result<()> {
    if relationships.is_empty() {
        writeln!(w, "No relationships found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} relationship(s):", relationships.len())?;
    writeln!(w)?;
    for relationship in relationships {
        print_relationship_line(w, relationship, config)?;
    }
    Ok(())
}
