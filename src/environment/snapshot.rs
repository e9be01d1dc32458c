//! The detected interpreter/runner state.

use serde::Serialize;

/// Point-in-time record of the detected Python environment.
///
/// Replaced wholesale on each detection cycle. The default value is the
/// all-empty "unknown" snapshot observers see before detection completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvironmentSnapshot {
    /// Interpreter command that passed its version check.
    pub interpreter_path: Option<String>,

    /// Interpreter version (e.g. `3.11.4`).
    pub version: Option<String>,

    /// Whether `python -m behave --version` succeeded.
    pub runner_installed: bool,

    /// Runner version, or `installed` when its output had none.
    pub runner_version: Option<String>,
}

impl EnvironmentSnapshot {
    /// The "not found" snapshot: no path, no version, runner absent.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Whether nothing at all is known yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
