//! State shared by every command of one invocation.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::cli::args::Cli;
use crate::config::{apply_env_overrides, load_config, BonnieConfig, ConfigPaths};
use crate::environment::{ActiveEnvironmentProvider, InterpreterProvider, Probe, SystemProbe};
use crate::error::Result;
use crate::session::{Session, SessionOptions};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

/// Global options and collaborators resolved from the command line.
pub struct CommandContext {
    cwd: PathBuf,
    workspace: Workspace,
    user_dir: Option<PathBuf>,
    python: Option<String>,
    dry_run: bool,
    probe: Rc<dyn Probe>,
    provider: Rc<dyn InterpreterProvider>,
}

impl CommandContext {
    /// Resolve the global flags against `cwd`.
    ///
    /// Without `--workspace` the current directory is the only folder.
    pub fn from_cli(cli: &Cli, cwd: PathBuf) -> Self {
        let mut context = Self::new(cwd, &cli.workspaces);
        context.python = cli.python.clone();
        context.dry_run = cli.dry_run;
        context
    }

    /// A context over `folders` (relative to `cwd`) using the system probe.
    pub fn new(cwd: PathBuf, folders: &[PathBuf]) -> Self {
        let workspace = if folders.is_empty() {
            Workspace::new(vec![cwd.clone()])
        } else {
            Workspace::from_paths(&cwd, folders)
        };
        let provider = ActiveEnvironmentProvider::new(workspace.first_folder());

        Self {
            cwd,
            workspace,
            user_dir: crate::state::user_dir(),
            python: None,
            dry_run: false,
            probe: Rc::new(SystemProbe),
            provider: Rc::new(provider),
        }
    }

    /// Replace the subprocess probe and interpreter provider.
    pub fn with_detection(mut self, probe: Rc<dyn Probe>, provider: Rc<dyn InterpreterProvider>) -> Self {
        self.probe = probe;
        self.provider = provider;
        self
    }

    /// Replace the user directory.
    pub fn with_user_dir(mut self, user_dir: Option<PathBuf>) -> Self {
        self.user_dir = user_dir;
        self
    }

    /// Set the `--python` override.
    pub fn with_python(mut self, python: Option<String>) -> Self {
        self.python = python;
        self
    }

    /// Set `--dry-run`.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory relative paths are resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The open workspace.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Whether runs should be printed instead of executed.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Config files for the first workspace folder.
    pub fn config_paths(&self) -> ConfigPaths {
        ConfigPaths::discover_in(self.user_dir.as_deref(), self.workspace.first_folder())
    }

    /// Load configuration: files, then `BONNIE_PYTHON_PATH`, then `--python`.
    pub fn load_config(&self) -> Result<BonnieConfig> {
        let mut config = load_config(&self.config_paths())?;
        apply_env_overrides(&mut config, |key: &str| std::env::var(key));
        if let Some(python) = self.python.as_ref().filter(|p| !p.trim().is_empty()) {
            config.python_path = Some(python.clone());
        }
        Ok(config)
    }

    /// Load configuration and activate a session over it.
    pub fn activate(&self, ui: &mut dyn UserInterface) -> Result<Session> {
        let options = SessionOptions {
            workspace: self.workspace.clone(),
            config: self.load_config()?,
            user_dir: self.user_dir.clone(),
        };
        Ok(Session::activate(
            options,
            Box::new(Rc::clone(&self.probe)),
            Box::new(Rc::clone(&self.provider)),
            ui,
        ))
    }
}
