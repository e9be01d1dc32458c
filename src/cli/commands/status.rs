//! Status command implementation.
//!
//! The `bonnie status` command shows the status indicator and the detected
//! environment.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::StatusArgs;
use crate::environment::EnvironmentSnapshot;
use crate::error::{BonnieError, Result};
use crate::status::{StatusIndicator, StatusKind};
use crate::ui::{BonnieTheme, OutputMode, TerminalUI, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// Machine-readable status report.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// The indicator as it would be rendered.
    pub status: StatusIndicator,
    /// The detected environment.
    pub environment: EnvironmentSnapshot,
    /// Open workspace folders.
    pub workspace: Vec<PathBuf>,
}

/// The status command implementation.
pub struct StatusCommand<'a> {
    context: &'a CommandContext,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(context: &'a CommandContext, args: StatusArgs) -> Self {
        Self { context, args }
    }

    /// Activate and build the report.
    pub fn report(&self, ui: &mut dyn UserInterface) -> Result<StatusReport> {
        let session = self.context.activate(ui)?;
        let report = StatusReport {
            status: session.status(),
            environment: session.snapshot(),
            workspace: session.workspace().folders().to_vec(),
        };
        session.deactivate();
        Ok(report)
    }

    fn show(&self, ui: &mut dyn UserInterface, report: &StatusReport) {
        ui.show_header("Bonnie Status");

        match report.status.kind() {
            StatusKind::NotFound => ui.warning(report.status.text()),
            _ => ui.success(report.status.text()),
        }
        if let Some(tooltip) = report.status.tooltip() {
            for line in tooltip.lines() {
                ui.message(&format!("  {}", line));
            }
        }

        let env = &report.environment;
        if ui.output_mode().shows_details() {
            let theme = BonnieTheme::plain();
            ui.message("");
            ui.message(&theme.format_field(
                "Interpreter",
                env.interpreter_path.as_deref().unwrap_or("-"),
            ));
            ui.message(&theme.format_field("Version", env.version.as_deref().unwrap_or("-")));
            ui.message(&theme.format_field(
                "Behave",
                env.runner_version.as_deref().unwrap_or("not installed"),
            ));
            for folder in &report.workspace {
                ui.message(&theme.format_field("Workspace", &folder.display().to_string()));
            }
        }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            // Keep stdout parseable: activation output is suppressed.
            let mut quiet = TerminalUI::new(OutputMode::Quiet, false);
            let report = self.report(&mut quiet)?;
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| BonnieError::Other(e.into()))?;
            ui.output(&json);
        } else {
            let report = self.report(ui)?;
            self.show(ui, &report);
        }
        Ok(CommandResult::success())
    }
}
