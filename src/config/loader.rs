//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::schema::BonnieConfig;
use crate::error::{BonnieError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `pythonPath`.
pub const PYTHON_PATH_ENV: &str = "BONNIE_PYTHON_PATH";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.bonnie/config.yml`, or `$BONNIE_HOME/config.yml`)
/// 2. Workspace config (`<workspace>/.bonnie/config.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.bonnie/config.yml
    pub user_global: Option<PathBuf>,

    /// Workspace config: .bonnie/config.yml
    pub workspace: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files using an explicit user directory
    /// (the directory holding the user's `config.yml`).
    pub fn discover_in(user_dir: Option<&Path>, workspace_root: Option<&Path>) -> Self {
        Self {
            user_global: user_dir.map(|dir| dir.join("config.yml")).filter(|p| p.is_file()),
            workspace: workspace_root
                .map(|root| root.join(".bonnie").join("config.yml"))
                .filter(|p| p.is_file()),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.workspace.iter()).collect()
    }
}

/// Parse YAML content into BonnieConfig.
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BonnieConfig> {
    if content.trim().is_empty() {
        return Ok(BonnieConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| BonnieError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file as a raw YAML mapping.
fn load_layer(path: &Path) -> Result<Mapping> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str(&content) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(BonnieError::ConfigParseError {
            path: path.to_path_buf(),
            message: "expected a mapping of configuration keys".to_string(),
        }),
        Err(e) => Err(BonnieError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Load and merge the discovered config files.
///
/// Each key set in a later file replaces the same key from an earlier one.
/// Missing files are skipped, so an empty [`ConfigPaths`] yields defaults.
pub fn load_config(paths: &ConfigPaths) -> Result<BonnieConfig> {
    let mut merged = Mapping::new();
    let mut last_path = PathBuf::new();

    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        for (key, value) in load_layer(path)? {
            if value.is_null() {
                merged.remove(&key);
            } else {
                merged.insert(key, value);
            }
        }
        last_path = path.clone();
    }

    serde_yaml::from_value(Value::Mapping(merged)).map_err(|e| BonnieError::ConfigParseError {
        path: last_path,
        message: e.to_string(),
    })
}

/// Apply environment variable overrides using a custom lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn apply_env_overrides<F>(config: &mut BonnieConfig, env_fn: F)
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(python) = env_fn(PYTHON_PATH_ENV) {
        if !python.trim().is_empty() {
            config.python_path = Some(python);
        }
    }
}
