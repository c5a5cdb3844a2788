//! Project configuration file loading.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TidyError};

/// File name of the project configuration, relative to the repository top level.
pub const CONFIG_FILE_NAME: &str = ".beman-tidy.yml";

/// Settings read from `.beman-tidy.yml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Promote every RECOMMENDATION to REQUIREMENT.
    pub require_all: Option<bool>,

    /// Path to a custom standard, relative to the repository top level.
    pub standard: Option<PathBuf>,

    /// Rule names never run in this repository.
    pub ignore: Vec<String>,
}

impl ProjectConfig {
    /// Parse configuration from YAML text.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| TidyError::ConfigParseError {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the configuration of the repository at `top_level`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(top_level: &Path) -> Result<Self> {
        let path = top_level.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, top_level.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config = Self::parse(&content, &path)?;
        if let Some(standard) = config.standard.take() {
            config.standard = Some(if standard.is_absolute() {
                standard
            } else {
                top_level.join(standard)
            });
        }

        tracing::debug!("Loaded project config from {}", path.display());
        Ok(config)
    }

    /// Drop ignored names from `requested`, keeping order.
    pub fn filter_ignored(&self, requested: Vec<String>) -> Vec<String> {
        for name in &self.ignore {
            if !requested.contains(name) {
                tracing::warn!("Ignored rule '{}' is not among the requested checks", name);
            }
        }

        requested
            .into_iter()
            .filter(|name| !self.ignore.contains(name))
            .collect()
    }
}
