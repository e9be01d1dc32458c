//! Configuration loading for Bonnie.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layered loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use bonnie::config::{load_config, ConfigPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".bonnie");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "behaveArgs: [\"--no-capture\"]").unwrap();
//!
//! let paths = ConfigPaths::discover_in(None, Some(temp.path()));
//! let config = load_config(&paths).unwrap();
//! assert_eq!(config.behave_args, vec!["--no-capture".to_string()]);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. User global config (`~/.bonnie/config.yml`, or `$BONNIE_HOME/config.yml`)
//! 2. Workspace config (`<workspace>/.bonnie/config.yml`)
//! 3. `BONNIE_PYTHON_PATH` environment variable
//! 4. `--python` command-line flag

pub mod loader;
pub mod schema;

pub use loader::{apply_env_overrides, load_config, parse_config, ConfigPaths, PYTHON_PATH_ENV};
pub use schema::{BonnieConfig, BEHAVE_ARGS_KEY, PYTHON_PATH_KEY};
