//! cookgraph - a recipe knowledge graph loaded from CSV.
//!
//! This crate provides both a CLI application and a library for loading a
//! `nodes.csv` / `relationships.csv` pair into an immutable, indexed graph.
//!
//! # Example
//!
//! ```no_run
//! use cookgraph::config::DatasetConfig;
//! use cookgraph::dataset::load_dataset;
//! use cookgraph::domain::RelationshipType;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> cookgraph::error::Result<()> {
//!     let loaded = load_dataset(Path::new("data"), &DatasetConfig::default()).await?;
//!     for ingredient in loaded.graph.neighbors("R001", RelationshipType::Requires) {
//!         println!("{}", ingredient.name);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod graph;
pub mod loader;
pub mod validate;

// Public CLI module (needed by binary)
pub mod cli;

pub mod app;
pub mod output;
