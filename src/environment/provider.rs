//! Companion interpreter providers.
//!
//! When no interpreter is configured, detection asks a provider which
//! interpreter is currently selected. Providers are best-effort: any error
//! or empty answer falls through to the bare `python` command.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::Result;

/// Something that knows which Python interpreter the user has selected.
pub trait InterpreterProvider {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// The execution command of the selected interpreter.
    ///
    /// The first element is the interpreter itself; any remaining elements
    /// are launcher arguments and are ignored by detection.
    fn selected_interpreter(&self) -> Result<Option<Vec<String>>>;
}

/// Provider that never has an answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl InterpreterProvider for NoProvider {
    fn name(&self) -> &str {
        "none"
    }

    fn selected_interpreter(&self) -> Result<Option<Vec<String>>> {
        Ok(None)
    }
}

impl<P: InterpreterProvider + ?Sized> InterpreterProvider for Rc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn selected_interpreter(&self) -> Result<Option<Vec<String>>> {
        (**self).selected_interpreter()
    }
}

/// Environment variables naming an activated environment, in priority order.
const ENV_VARS: &[&str] = &["VIRTUAL_ENV", "CONDA_PREFIX"];

/// Workspace-local virtual environment directories, in priority order.
const WORKSPACE_VENVS: &[&str] = &[".venv", "venv"];

/// Finds the interpreter of the active virtual environment.
///
/// Checks `$VIRTUAL_ENV`, then `$CONDA_PREFIX`, then `.venv` and `venv`
/// inside the workspace folder.
pub struct ActiveEnvironmentProvider<F>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    workspace_root: Option<PathBuf>,
    env_fn: F,
}

impl ActiveEnvironmentProvider<fn(&str) -> std::result::Result<String, std::env::VarError>> {
    /// Provider reading the real process environment.
    pub fn new(workspace_root: Option<&Path>) -> Self {
        Self::with_env(workspace_root, |key: &str| std::env::var(key))
    }
}

impl<F> ActiveEnvironmentProvider<F>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    /// Provider with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env(workspace_root: Option<&Path>, env_fn: F) -> Self {
        Self {
            workspace_root: workspace_root.map(Path::to_path_buf),
            env_fn,
        }
    }

    fn candidate_roots(&self) -> Vec<PathBuf> {
        let from_env = ENV_VARS
            .iter()
            .filter_map(|var| (self.env_fn)(var).ok())
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let from_workspace = self
            .workspace_root
            .iter()
            .flat_map(|root| WORKSPACE_VENVS.iter().map(move |dir| root.join(dir)));

        from_env.chain(from_workspace).collect()
    }
}

impl<F> InterpreterProvider for ActiveEnvironmentProvider<F>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    fn name(&self) -> &str {
        "active-environment"
    }

    fn selected_interpreter(&self) -> Result<Option<Vec<String>>> {
        let found = self
            .candidate_roots()
            .iter()
            .flat_map(|root| interpreter_candidates(root))
            .find(|python| python.is_file());

        Ok(found.map(|python| {
            tracing::debug!("Found environment interpreter at {}", python.display());
            vec![python.to_string_lossy().to_string()]
        }))
    }
}

/// Possible interpreter locations inside an environment root, in order.
pub fn interpreter_candidates(root: &Path) -> Vec<PathBuf> {
    candidates_for(root, cfg!(windows))
}

// Windows venvs use `Scripts\python.exe`; conda keeps `python.exe` at the root.
fn candidates_for(root: &Path, windows: bool) -> Vec<PathBuf> {
    if windows {
        vec![root.join("Scripts").join("python.exe"), root.join("python.exe")]
    } else {
        vec![root.join("bin").join("python")]
    }
}
