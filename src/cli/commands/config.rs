//! Config command implementation.
//!
//! The `bonnie config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::BonnieConfig;
use crate::error::{BonnieError, Result};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    context: &'a CommandContext,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(context: &'a CommandContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = serde_json::to_string_pretty(&BonnieConfig::json_schema())
                .map_err(|e| BonnieError::Other(e.into()))?;
            ui.output(&schema);
            return Ok(CommandResult::success());
        }

        let config = match self.context.load_config() {
            Ok(config) => config,
            Err(e @ BonnieError::ConfigParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| BonnieError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let paths = self.context.config_paths();
        let existing = paths.all_existing();
        if !existing.is_empty() {
            for path in &existing {
                ui.message(&format!("# {}", path.display()));
            }
        }
        let yaml = serde_yaml::to_string(&config).map_err(|e| BonnieError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".bonnie");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn context(temp: &TempDir) -> CommandContext {
        CommandContext::new(temp.path().to_path_buf(), &[]).with_user_dir(None)
    }

    #[test]
    fn yaml_output_lists_source_files() {
        let temp = setup_project("behaveArgs: [\"--no-capture\"]\n");
        let context = context(&temp);
        let mut ui = MockUI::new();

        let result = ConfigCommand::new(&context, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.messages().iter().any(|m| m.starts_with('#') && m.contains("config.yml")));
        assert!(ui.has_message("behaveArgs:"));
        assert!(ui.has_message("--no-capture"));
    }

    #[test]
    fn json_output_uses_camel_case_keys() {
        let temp = setup_project("behaveArgs: [\"-q\"]\n");
        let context = context(&temp).with_python(Some("python3.11".to_string()));
        let mut ui = MockUI::new();

        ConfigCommand::new(
            &context,
            ConfigArgs {
                json: true,
                ..Default::default()
            },
        )
        .execute(&mut ui)
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value["pythonPath"], "python3.11");
        assert_eq!(value["behaveArgs"][0], "-q");
    }

    #[test]
    fn schema_output_names_both_keys() {
        let temp = TempDir::new().unwrap();
        let context = context(&temp);
        let mut ui = MockUI::new();

        ConfigCommand::new(
            &context,
            ConfigArgs {
                schema: true,
                ..Default::default()
            },
        )
        .execute(&mut ui)
        .unwrap();

        let schema = &ui.outputs()[0];
        assert!(schema.contains("pythonPath"));
        assert!(schema.contains("behaveArgs"));
        assert!(schema.contains("Bonnie Configuration"));
    }

    #[test]
    fn unknown_key_fails_with_parse_error() {
        let temp = setup_project("pythonpath: python3\n");
        let context = context(&temp);
        let mut ui = MockUI::new();

        let result = ConfigCommand::new(&context, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Failed to parse config"));
    }
}
