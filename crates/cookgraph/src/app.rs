//! Application context for CLI command execution.
//!
//! # Example
//!
//! ```no_run
//! use cookgraph::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new("data"), None).await?;
//!     println!("{} nodes", app.graph().node_count());
//!     Ok(())
//! }
//! ```

use crate::config::DatasetConfig;
use crate::dataset::{load_dataset, LoadWarning, LoadedGraph};
use crate::error::Result;
use crate::graph::KnowledgeGraph;
use std::path::{Path, PathBuf};

/// A loaded dataset plus the configuration it was loaded with.
#[derive(Debug)]
pub struct App {
    data_dir: PathBuf,
    config: DatasetConfig,
    loaded: LoadedGraph,
}

impl App {
    /// Load the dataset in `data_dir`.
    ///
    /// The configuration comes from `config_path` when given, otherwise from
    /// `cookgraph.yaml` in `data_dir`, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read or parsed
    /// - Either table cannot be read
    /// - The dataset violates a structural invariant
    pub async fn from_directory(data_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => DatasetConfig::load(path).await?,
            None => DatasetConfig::load_or_default(data_dir).await?,
        };

        let loaded = load_dataset(data_dir, &config).await?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            loaded,
        })
    }

    /// Get the loaded graph.
    pub fn graph(&self) -> &KnowledgeGraph {
        &self.loaded.graph
    }

    /// Get the warnings raised while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.loaded.warnings
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the dataset configuration in effect.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }
}
