//! Configuration loading from TOML files.

use crate::schema::ReportConfig;
use avocado_common::{AvocadoError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration loader backed by a TOML file.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses and validates configuration from TOML text. Missing keys take
    /// their default values.
    pub fn from_toml_str(content: &str) -> Result<ReportConfig> {
        let config: ReportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file.
    pub fn load(&self) -> Result<ReportConfig> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AvocadoError::config_with_source(
                format!("Failed to read {}", self.path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Loads configuration from the given file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<ReportConfig> {
        Self::new(path.as_ref()).load()
    }
}
