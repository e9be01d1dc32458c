//! Error types for Bonnie operations.
//!
//! This module defines [`BonnieError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Precondition failures of the run actions (missing interpreter, missing
//!   runner, no workspace, wrong file kind, no scenario) are distinct variants
//!   so the CLI can surface them as a single user-visible message
//! - Subprocess failures during environment detection never become errors;
//!   they degrade the snapshot instead (see [`crate::environment`])
//! - Use `anyhow::Error` (via `BonnieError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Bonnie operations.
#[derive(Debug, Error)]
pub enum BonnieError {
    /// No interpreter could be resolved, or it failed its version check.
    #[error("Python interpreter not found. Please configure in settings.")]
    EnvironmentNotFound,

    /// The interpreter was found but `behave` could not be imported.
    #[error("Behave is not installed in the current Python environment.")]
    RunnerNotInstalled,

    /// No workspace folder is open.
    #[error("No workspace folder open.")]
    NoWorkspace,

    /// A file-scoped action was invoked without an active document.
    #[error("No active editor.")]
    NoActiveEditor,

    /// The active file does not live under any open workspace folder.
    #[error("File is not in a workspace folder.")]
    FileNotInWorkspace { path: PathBuf },

    /// The active file is not a feature file.
    #[error("Current file is not a feature file.")]
    NotFeatureFile { path: PathBuf },

    /// Scanning backward from the cursor found no scenario heading.
    #[error("No scenario found at cursor position.")]
    NoScenarioAtCursor { line: usize },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to read or write global state.
    #[error("State error: {message}")]
    StateError { message: String },

    /// The terminal could not start the composed command.
    #[error("Failed to launch command: {command}")]
    TerminalFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BonnieError {
    /// Whether this error is an expected precondition failure of a run action.
    ///
    /// These are shown to the user as-is; everything else is prefixed with
    /// `Error:` by the CLI.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::EnvironmentNotFound
                | Self::RunnerNotInstalled
                | Self::NoWorkspace
                | Self::NoActiveEditor
                | Self::FileNotInWorkspace { .. }
                | Self::NotFeatureFile { .. }
                | Self::NoScenarioAtCursor { .. }
        )
    }
}

/// Result type alias for Bonnie operations.
pub type Result<T> = std::result::Result<T, BonnieError>;
