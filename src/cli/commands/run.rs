//! Run command implementations.
//!
//! `bonnie run`, `bonnie feature <FILE>` and `bonnie scenario <FILE> --line N`
//! all go through [`RunCommand`]; they differ only in the [`RunAction`] and
//! the document they hand to the launcher.

use std::path::PathBuf;

use crate::error::{BonnieError, Result};
use crate::feature::ActiveDocument;
use crate::launcher::{EchoTerminal, LaunchReport, RunAction, ShellTerminal, Terminal};
use crate::ui::UserInterface;
use crate::workspace::absolutize;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The file and cursor line a file-scoped run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTarget {
    /// File as given on the command line.
    pub file: PathBuf,
    /// 1-based editor line.
    pub line: usize,
}

/// Runs one of the three actions.
pub struct RunCommand<'a> {
    context: &'a CommandContext,
    action: RunAction,
    document: Option<DocumentTarget>,
}

impl<'a> RunCommand<'a> {
    /// `bonnie run`.
    pub fn all_features(context: &'a CommandContext) -> Self {
        Self {
            context,
            action: RunAction::AllFeatures,
            document: None,
        }
    }

    /// `bonnie feature <FILE>`.
    pub fn feature(context: &'a CommandContext, file: PathBuf) -> Self {
        Self {
            context,
            action: RunAction::CurrentFeature,
            document: Some(DocumentTarget { file, line: 1 }),
        }
    }

    /// `bonnie scenario <FILE> --line <LINE>`.
    pub fn scenario(context: &'a CommandContext, file: PathBuf, line: usize) -> Self {
        Self {
            context,
            action: RunAction::ScenarioUnderCursor,
            document: Some(DocumentTarget { file, line }),
        }
    }

    /// The action this command runs.
    pub fn action(&self) -> RunAction {
        self.action
    }

    /// Execute against an explicit terminal.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        terminal: &mut dyn Terminal,
    ) -> Result<CommandResult> {
        let session = self.context.activate(ui)?;

        let outcome = self
            .open_document()
            .and_then(|document| session.run(self.action, document.as_ref(), terminal));
        session.deactivate();

        match outcome {
            Ok(report) => {
                self.show_report(ui, &report);
                Ok(CommandResult::success())
            }
            Err(e) if e.is_user_facing() => {
                tracing::debug!("{} refused: {:?}", self.action.id(), e);
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }

    fn open_document(&self) -> Result<Option<ActiveDocument>> {
        let Some(target) = &self.document else {
            return Ok(None);
        };
        let path = absolutize(self.context.cwd(), &target.file);
        let document = ActiveDocument::open(&path, target.line.saturating_sub(1)).map_err(|e| {
            match e {
                BonnieError::Io(io) => BonnieError::Other(anyhow::anyhow!(
                    "Cannot read {}: {}",
                    path.display(),
                    io
                )),
                other => other,
            }
        })?;
        Ok(Some(document))
    }

    fn show_report(&self, ui: &mut dyn UserInterface, report: &LaunchReport) {
        if !ui.output_mode().shows_details() {
            return;
        }
        ui.show_header(report.action.title());
        ui.message(&format!("{} in {}", report.request.name, report.request.cwd.display()));
        if let Some(scenario) = &report.scenario {
            ui.message(&format!("Scenario \"{}\" at line {}", scenario.name, scenario.line));
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.context.dry_run() {
            self.execute_with(ui, &mut EchoTerminal::stdout())
        } else {
            self.execute_with(ui, &mut ShellTerminal)
        }
    }
}
