//! Activation lifecycle.
//!
//! A [`Session`] wires the pieces together the way a host would on
//! activation: welcome once, detect the environment, keep the status
//! indicator subscribed, and hand the current snapshot to the launcher on
//! every run.

mod welcome;

pub use welcome::{show_welcome_once, WELCOME_MESSAGE};

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::{BonnieConfig, PYTHON_PATH_KEY};
use crate::environment::{EnvironmentDetector, EnvironmentSnapshot, InterpreterProvider, Observer, Probe};
use crate::error::Result;
use crate::feature::ActiveDocument;
use crate::launcher::{LaunchReport, Launcher, RunAction, Terminal};
use crate::status::{StatusIndicator, StatusKind};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

/// Inputs to [`Session::activate`].
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Open workspace folders.
    pub workspace: Workspace,
    /// Resolved configuration.
    pub config: BonnieConfig,
    /// Directory holding the welcome state; `None` disables the welcome.
    pub user_dir: Option<PathBuf>,
}

/// An activated Bonnie instance.
pub struct Session {
    workspace: Workspace,
    config: BonnieConfig,
    detector: EnvironmentDetector,
    provider: Box<dyn InterpreterProvider>,
    status: Rc<RefCell<StatusIndicator>>,
}

impl Session {
    /// Activate: welcome, detect and subscribe the status indicator.
    pub fn activate(
        options: SessionOptions,
        probe: Box<dyn Probe>,
        provider: Box<dyn InterpreterProvider>,
        ui: &mut dyn UserInterface,
    ) -> Self {
        tracing::info!("Bonnie is now active");

        show_welcome_once(options.user_dir.as_deref(), ui);

        let mut session = Self {
            workspace: options.workspace,
            config: options.config,
            detector: EnvironmentDetector::new(probe),
            provider,
            status: Rc::new(RefCell::new(StatusIndicator::new())),
        };
        session.redetect(ui);

        let status = Rc::clone(&session.status);
        session
            .detector
            .subscribe(Box::new(move |snapshot| status.borrow_mut().update(snapshot)));

        tracing::info!("Bonnie activation complete");
        session
    }

    /// Replace the configuration.
    ///
    /// Re-runs detection only when `pythonPath` changed. Returns the keys
    /// that changed.
    pub fn configuration_changed(
        &mut self,
        config: BonnieConfig,
        ui: &mut dyn UserInterface,
    ) -> Vec<&'static str> {
        let changed = self.config.changed_keys(&config);
        self.config = config;

        if changed.contains(&PYTHON_PATH_KEY) {
            tracing::debug!("{} changed; re-detecting", PYTHON_PATH_KEY);
            self.redetect(ui);
        }
        changed
    }

    /// Run `action` against the current snapshot and configuration.
    pub fn run(
        &self,
        action: RunAction,
        document: Option<&ActiveDocument>,
        terminal: &mut dyn Terminal,
    ) -> Result<LaunchReport> {
        let snapshot = self.detector.snapshot();
        Launcher::new(&snapshot, &self.config, &self.workspace).run(action, document, terminal)
    }

    /// Register an observer of future detections.
    pub fn subscribe(&mut self, observer: Observer) {
        self.detector.subscribe(observer);
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        self.detector.snapshot()
    }

    /// A copy of the status indicator.
    pub fn status(&self) -> StatusIndicator {
        self.status.borrow().clone()
    }

    /// Number of detection cycles run so far.
    pub fn detections(&self) -> u64 {
        self.detector.detections()
    }

    /// The active configuration.
    pub fn config(&self) -> &BonnieConfig {
        &self.config
    }

    /// The open workspace.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Tear down the session.
    pub fn deactivate(self) {
        tracing::info!("Bonnie deactivated");
    }

    fn redetect(&mut self, ui: &mut dyn UserInterface) {
        let mut spinner = ui.start_spinner("Detecting Python environment...");
        let config = self.config.anchored_to(self.workspace.first_folder());
        let snapshot = self.detector.initialize(&config, &*self.provider);
        let indicator = StatusIndicator::from_snapshot(snapshot);
        match indicator.kind() {
            StatusKind::NotFound => spinner.finish_error(indicator.text()),
            _ => spinner.finish_success(indicator.text()),
        }
    }
}
