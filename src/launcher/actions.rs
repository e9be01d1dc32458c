//! The three run actions.
//!
//! Every action validates its preconditions in a fixed order, composes a
//! behave command line and hands it to a [`Terminal`]:
//!
//! 1. A workspace folder is open
//! 2. An interpreter was detected
//! 3. behave is installed
//! 4. (file-scoped) the active document is a feature file inside a folder
//! 5. (scenario) a scenario heading encloses the cursor
//!
//! The first failing check aborts the action with its error.

use std::path::Path;

use crate::config::BonnieConfig;
use crate::environment::EnvironmentSnapshot;
use crate::error::{BonnieError, Result};
use crate::feature::{ActiveDocument, ScenarioTarget};
use crate::workspace::Workspace;

use super::compose::{compose_command, RunTarget};
use super::terminal::{Terminal, TerminalRequest};

/// Prefix of every terminal name.
const TERMINAL_PREFIX: &str = "Bonnie";

/// The user-invokable run actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    AllFeatures,
    CurrentFeature,
    ScenarioUnderCursor,
}

impl RunAction {
    /// All actions, in registration order.
    pub const ALL: [RunAction; 3] = [
        RunAction::AllFeatures,
        RunAction::CurrentFeature,
        RunAction::ScenarioUnderCursor,
    ];

    /// Stable identifier of the action.
    pub fn id(&self) -> &'static str {
        match self {
            Self::AllFeatures => "bonnie.runAllFeatures",
            Self::CurrentFeature => "bonnie.runCurrentFeature",
            Self::ScenarioUnderCursor => "bonnie.runScenarioUnderCursor",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::AllFeatures => "Run All Features",
            Self::CurrentFeature => "Run Current Feature",
            Self::ScenarioUnderCursor => "Run Scenario Under Cursor",
        }
    }
}

/// What an action sent to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// The action that ran.
    pub action: RunAction,
    /// The request handed to the terminal.
    pub request: TerminalRequest,
    /// The scenario targeted, for scenario runs.
    pub scenario: Option<ScenarioTarget>,
}

/// Runs actions against one snapshot, configuration and workspace.
///
/// Built fresh for each invocation so it always sees the current snapshot.
pub struct Launcher<'a> {
    snapshot: &'a EnvironmentSnapshot,
    config: &'a BonnieConfig,
    workspace: &'a Workspace,
}

impl<'a> Launcher<'a> {
    /// Create a launcher.
    pub fn new(
        snapshot: &'a EnvironmentSnapshot,
        config: &'a BonnieConfig,
        workspace: &'a Workspace,
    ) -> Self {
        Self {
            snapshot,
            config,
            workspace,
        }
    }

    /// Run `action`. `document` is ignored by [`RunAction::AllFeatures`].
    pub fn run(
        &self,
        action: RunAction,
        document: Option<&ActiveDocument>,
        terminal: &mut dyn Terminal,
    ) -> Result<LaunchReport> {
        match action {
            RunAction::AllFeatures => self.run_all_features(terminal),
            RunAction::CurrentFeature => self.run_current_feature(document, terminal),
            RunAction::ScenarioUnderCursor => self.run_scenario_under_cursor(document, terminal),
        }
    }

    /// Run every feature from the first workspace folder.
    pub fn run_all_features(&self, terminal: &mut dyn Terminal) -> Result<LaunchReport> {
        let folder = self.require_folder()?;
        let interpreter = self.require_environment()?;

        let request = self.request(
            format!("{} - Run All Features", TERMINAL_PREFIX),
            folder,
            interpreter,
            &RunTarget::AllFeatures,
        );
        self.launch(RunAction::AllFeatures, request, None, terminal)
    }

    /// Run the feature file open in `document`.
    pub fn run_current_feature(
        &self,
        document: Option<&ActiveDocument>,
        terminal: &mut dyn Terminal,
    ) -> Result<LaunchReport> {
        self.require_folder()?;
        let interpreter = self.require_environment()?;
        let document = require_feature(document)?;
        let (folder, path) = self.locate(document)?;

        let request = self.request(
            format!("{} - Run Feature", TERMINAL_PREFIX),
            folder,
            interpreter,
            &RunTarget::Feature { path },
        );
        self.launch(RunAction::CurrentFeature, request, None, terminal)
    }

    /// Run the scenario enclosing the cursor in `document`.
    pub fn run_scenario_under_cursor(
        &self,
        document: Option<&ActiveDocument>,
        terminal: &mut dyn Terminal,
    ) -> Result<LaunchReport> {
        self.require_folder()?;
        let interpreter = self.require_environment()?;
        let document = require_feature(document)?;

        let scenario =
            document
                .scenario_at_cursor()
                .ok_or(BonnieError::NoScenarioAtCursor {
                    line: document.cursor_line(),
                })?;
        let (folder, path) = self.locate(document)?;

        let request = self.request(
            format!("{} - {}", TERMINAL_PREFIX, scenario.name),
            folder,
            interpreter,
            &RunTarget::Scenario {
                path,
                line: scenario.line,
            },
        );
        self.launch(
            RunAction::ScenarioUnderCursor,
            request,
            Some(scenario),
            terminal,
        )
    }

    fn require_folder(&self) -> Result<&'a Path> {
        self.workspace.first_folder().ok_or(BonnieError::NoWorkspace)
    }

    fn require_environment(&self) -> Result<&'a str> {
        let interpreter = self
            .snapshot
            .interpreter_path
            .as_deref()
            .ok_or(BonnieError::EnvironmentNotFound)?;
        if !self.snapshot.runner_installed {
            return Err(BonnieError::RunnerNotInstalled);
        }
        Ok(interpreter)
    }

    fn locate(&self, document: &ActiveDocument) -> Result<(&'a Path, String)> {
        let not_in_workspace = || BonnieError::FileNotInWorkspace {
            path: document.path().to_path_buf(),
        };
        let folder = self
            .workspace
            .folder_for(document.path())
            .ok_or_else(not_in_workspace)?;
        let relative = self
            .workspace
            .relative_path(document.path())
            .ok_or_else(not_in_workspace)?;
        Ok((folder, relative))
    }

    fn request(
        &self,
        name: String,
        folder: &Path,
        interpreter: &str,
        target: &RunTarget,
    ) -> TerminalRequest {
        TerminalRequest {
            name,
            cwd: folder.to_path_buf(),
            command_line: compose_command(interpreter, target, &self.config.behave_args),
        }
    }

    fn launch(
        &self,
        action: RunAction,
        request: TerminalRequest,
        scenario: Option<ScenarioTarget>,
        terminal: &mut dyn Terminal,
    ) -> Result<LaunchReport> {
        tracing::debug!("{} composed: {}", action.id(), request.command_line);
        terminal.send(&request)?;
        Ok(LaunchReport {
            action,
            request,
            scenario,
        })
    }
}

fn require_feature(document: Option<&ActiveDocument>) -> Result<&ActiveDocument> {
    let document = document.ok_or(BonnieError::NoActiveEditor)?;
    if !document.is_feature_file() {
        return Err(BonnieError::NotFeatureFile {
            path: document.path().to_path_buf(),
        });
    }
    Ok(document)
}
