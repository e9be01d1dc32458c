//! Configuration schema definitions for Bonnie.
//!
//! This module contains the struct that maps to the `bonnie` configuration
//! namespace. Keys use camelCase on disk (`pythonPath`, `behaveArgs`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration key holding the interpreter override.
pub const PYTHON_PATH_KEY: &str = "pythonPath";

/// Configuration key holding extra runner arguments.
pub const BEHAVE_ARGS_KEY: &str = "behaveArgs";

/// Root configuration structure for `.bonnie/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[schemars(title = "Bonnie Configuration")]
pub struct BonnieConfig {
    /// Path to the Python interpreter. When unset, the active virtual
    /// environment is used, then `python` from PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_path: Option<String>,

    /// Extra arguments appended verbatim to every `behave` invocation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub behave_args: Vec<String>,
}

impl BonnieConfig {
    /// The configured interpreter, ignoring blank values.
    pub fn configured_python(&self) -> Option<&str> {
        self.python_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// A copy whose relative `pythonPath` is resolved against `root`.
    ///
    /// Only values containing a path separator are resolved; a bare name
    /// such as `python3` is still looked up on `PATH`.
    pub fn anchored_to(&self, root: Option<&Path>) -> BonnieConfig {
        let mut config = self.clone();
        if let (Some(python), Some(root)) = (self.configured_python(), root) {
            let has_separator = python.contains('/') || python.contains(std::path::MAIN_SEPARATOR);
            if has_separator && Path::new(python).is_relative() {
                config.python_path = Some(root.join(python).to_string_lossy().to_string());
            }
        }
        config
    }

    /// Names of the keys whose values differ between `self` and `other`.
    pub fn changed_keys(&self, other: &BonnieConfig) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.python_path != other.python_path {
            keys.push(PYTHON_PATH_KEY);
        }
        if self.behave_args != other.behave_args {
            keys.push(BEHAVE_ARGS_KEY);
        }
        keys
    }

    /// Render the JSON schema for the configuration file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(BonnieConfig)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_keys() {
        let yaml = "pythonPath: /opt/py/bin/python\nbehaveArgs: [\"--no-capture\", \"-t\", \"@smoke\"]\n";
        let config: BonnieConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.python_path.as_deref(), Some("/opt/py/bin/python"));
        assert_eq!(config.behave_args, vec!["--no-capture", "-t", "@smoke"]);
    }

    #[test]
    fn empty_document_is_default() {
        let config: BonnieConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, BonnieConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<BonnieConfig, _> = serde_yaml::from_str("python_path: python3");
        assert!(result.is_err());
    }

    #[test]
    fn blank_python_path_is_not_configured() {
        let config = BonnieConfig {
            python_path: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.configured_python(), None);
    }

    #[test]
    fn relative_python_path_is_anchored_to_root() {
        let config = BonnieConfig {
            python_path: Some(".venv/bin/python".to_string()),
            ..Default::default()
        };
        let anchored = config.anchored_to(Some(Path::new("/work/app")));
        assert_eq!(
            anchored.python_path,
            Some(Path::new("/work/app").join(".venv/bin/python").to_string_lossy().to_string())
        );
        assert_eq!(config.anchored_to(None), config);
    }

    #[test]
    fn bare_and_absolute_python_paths_are_kept() {
        let root = Some(Path::new("/work/app"));
        for python in ["python3", "/usr/bin/python3"] {
            let config = BonnieConfig {
                python_path: Some(python.to_string()),
                ..Default::default()
            };
            assert_eq!(config.anchored_to(root), config);
        }
    }

    #[test]
    fn changed_keys_reports_each_differing_key() {
        let before = BonnieConfig::default();
        let after = BonnieConfig {
            python_path: Some("python3".to_string()),
            behave_args: vec!["--format=progress".to_string()],
        };
        assert_eq!(
            before.changed_keys(&after),
            vec![PYTHON_PATH_KEY, BEHAVE_ARGS_KEY]
        );
        assert!(after.changed_keys(&after.clone()).is_empty());
    }

    #[test]
    fn schema_lists_both_keys() {
        let schema = BonnieConfig::json_schema();
        let properties = &schema["properties"];
        assert!(properties.get("pythonPath").is_some());
        assert!(properties.get("behaveArgs").is_some());
    }
}
