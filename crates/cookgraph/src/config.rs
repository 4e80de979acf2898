//! Dataset configuration.
//!
//! A data directory may carry a `cookgraph.yaml` naming its two tables and
//! how to read them. Every key is optional:
//!
//! ```yaml
//! nodes-file: nodes.csv
//! relationships-file: relationships.csv
//! delimiter: ","
//! parallel: true
//! ```

use crate::error::{ConfigError, Result};
use cookgraph_csv::ReadOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the configuration file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "cookgraph.yaml";

/// Default name of the nodes table
pub const DEFAULT_NODES_FILE: &str = "nodes.csv";

/// Default name of the relationships table
pub const DEFAULT_RELATIONSHIPS_FILE: &str = "relationships.csv";

/// Default field delimiter
pub const DEFAULT_DELIMITER: &str = ",";

/// Where the dataset lives and how to read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Nodes table, relative to the data directory
    pub nodes_file: String,

    /// Relationships table, relative to the data directory
    pub relationships_file: String,

    /// Field delimiter; a single ASCII character
    pub delimiter: String,

    /// Parse both tables on separate threads
    pub parallel: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            nodes_file: DEFAULT_NODES_FILE.to_string(),
            relationships_file: DEFAULT_RELATIONSHIPS_FILE.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            parallel: true,
        }
    }
}

impl DatasetConfig {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        // Surface a bad delimiter at load time rather than at first read.
        config.read_options()?;
        Ok(config)
    }

    /// Load `cookgraph.yaml` from `dir`, or the defaults when it is absent.
    pub async fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&path).await? {
            tracing::debug!(path = %path.display(), "Loading dataset configuration");
            Self::load(&path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Table reader options derived from this configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDelimiter`] unless `delimiter` is exactly one
    /// ASCII character.
    pub fn read_options(&self) -> std::result::Result<ReadOptions, ConfigError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(ReadOptions { delimiter: *byte }),
            _ => Err(ConfigError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    /// Path of the nodes table inside `dir`.
    #[must_use]
    pub fn nodes_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.nodes_file)
    }

    /// Path of the relationships table inside `dir`.
    #[must_use]
    pub fn relationships_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.relationships_file)
    }
}
