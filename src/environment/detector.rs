//! Python/behave environment detection.
//!
//! [`EnvironmentDetector`] owns the current [`EnvironmentSnapshot`] and the
//! list of observers that want to hear about it. Detection runs two
//! version checks through a [`Probe`] and replaces the snapshot wholesale.

use crate::config::BonnieConfig;

use super::probe::{extract_python_version, extract_runner_version, Probe};
use super::provider::InterpreterProvider;
use super::snapshot::EnvironmentSnapshot;

/// Interpreter command used when nothing else is configured or selected.
pub const FALLBACK_INTERPRETER: &str = "python";

/// Python module name of the test runner.
pub const RUNNER_MODULE: &str = "behave";

/// Runner version reported when its output carried no version number.
const RUNNER_VERSION_UNKNOWN: &str = "installed";

/// Callback invoked with the latest snapshot.
pub type Observer = Box<dyn FnMut(&EnvironmentSnapshot)>;

/// Owns the current snapshot and notifies observers of every detection.
pub struct EnvironmentDetector {
    probe: Box<dyn Probe>,
    snapshot: EnvironmentSnapshot,
    observers: Vec<Observer>,
    detections: u64,
}

impl EnvironmentDetector {
    /// Create a detector with an empty snapshot.
    pub fn new(probe: Box<dyn Probe>) -> Self {
        Self {
            probe,
            snapshot: EnvironmentSnapshot::default(),
            observers: Vec::new(),
            detections: 0,
        }
    }

    /// Resolve the interpreter and run detection for it.
    ///
    /// Call again whenever `pythonPath` changes; each call is a full re-run.
    pub fn initialize(
        &mut self,
        config: &BonnieConfig,
        provider: &dyn InterpreterProvider,
    ) -> &EnvironmentSnapshot {
        let interpreter = resolve_interpreter(config, provider);
        self.detect(&interpreter)
    }

    /// Run both version checks for `interpreter` and replace the snapshot.
    ///
    /// A failed interpreter check yields the "not found" snapshot; a failed
    /// runner check only marks the runner absent. Observers are notified
    /// either way.
    pub fn detect(&mut self, interpreter: &str) -> &EnvironmentSnapshot {
        tracing::debug!("Detecting Python environment for {}", interpreter);

        self.snapshot = match self.probe.run(interpreter, &["--version"]) {
            Some(output) => {
                let version = extract_python_version(&output);
                let runner = self
                    .probe
                    .run(interpreter, &["-m", RUNNER_MODULE, "--version"]);

                EnvironmentSnapshot {
                    interpreter_path: Some(interpreter.to_string()),
                    version,
                    runner_installed: runner.is_some(),
                    runner_version: runner.map(|out| {
                        extract_runner_version(&out)
                            .unwrap_or_else(|| RUNNER_VERSION_UNKNOWN.to_string())
                    }),
                }
            }
            None => {
                tracing::debug!("{} failed its version check", interpreter);
                EnvironmentSnapshot::not_found()
            }
        };
        self.detections += 1;

        tracing::debug!(
            "Detected python={:?} version={:?} behave={}",
            self.snapshot.interpreter_path,
            self.snapshot.version,
            self.snapshot.runner_installed
        );

        for observer in &mut self.observers {
            observer(&self.snapshot);
        }

        &self.snapshot
    }

    /// Register an observer and deliver the current snapshot to it at once.
    pub fn subscribe(&mut self, mut observer: Observer) {
        observer(&self.snapshot);
        self.observers.push(observer);
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        self.snapshot.clone()
    }

    /// Number of completed detection cycles.
    pub fn detections(&self) -> u64 {
        self.detections
    }
}

/// Pick the interpreter to probe.
///
/// Order: configured `pythonPath`, then the provider's selection, then
/// [`FALLBACK_INTERPRETER`]. Provider errors are swallowed.
pub fn resolve_interpreter(config: &BonnieConfig, provider: &dyn InterpreterProvider) -> String {
    if let Some(configured) = config.configured_python() {
        return configured.to_string();
    }

    match provider.selected_interpreter() {
        Ok(Some(command)) => {
            if let Some(first) = command.into_iter().find(|part| !part.trim().is_empty()) {
                tracing::debug!("Using interpreter {} from {}", first, provider.name());
                return first;
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::debug!("Interpreter provider {} failed: {}", provider.name(), e);
        }
    }

    FALLBACK_INTERPRETER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::probe::ScriptedProbe;
    use crate::environment::provider::NoProvider;
    use crate::error::{BonnieError, Result};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedProvider(Option<Vec<String>>);

    impl InterpreterProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn selected_interpreter(&self) -> Result<Option<Vec<String>>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    impl InterpreterProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn selected_interpreter(&self) -> Result<Option<Vec<String>>> {
            Err(BonnieError::Other(anyhow::anyhow!("extension not active")))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<EnvironmentSnapshot>>>, Observer) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observer: Observer = Box::new(move |snapshot: &EnvironmentSnapshot| {
            sink.borrow_mut().push(snapshot.clone())
        });
        (seen, observer)
    }

    fn config_with_python(path: &str) -> BonnieConfig {
        BonnieConfig {
            python_path: Some(path.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn detects_interpreter_and_runner() {
        let probe = ScriptedProbe::new().interpreter("python3", "3.11.4", Some("1.2.6"));
        let mut detector = EnvironmentDetector::new(Box::new(probe));

        let snapshot = detector.detect("python3").clone();

        assert_eq!(snapshot.interpreter_path.as_deref(), Some("python3"));
        assert_eq!(snapshot.version.as_deref(), Some("3.11.4"));
        assert!(snapshot.runner_installed);
        assert_eq!(snapshot.runner_version.as_deref(), Some("1.2.6"));
    }

    #[test]
    fn failed_version_check_degrades_fully() {
        let mut detector = EnvironmentDetector::new(Box::new(ScriptedProbe::new()));
        let snapshot = detector.detect("/does/not/exist/python").clone();

        assert_eq!(snapshot, EnvironmentSnapshot::not_found());
        assert_eq!(snapshot.interpreter_path, None);
        assert_eq!(snapshot.version, None);
        assert!(!snapshot.runner_installed);
    }

    #[test]
    fn failed_version_check_skips_runner_probe() {
        let probe = ScriptedProbe::new().respond("python", &["-m", "behave", "--version"], "1.2.6");
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let snapshot = detector.detect("python").clone();
        assert!(!snapshot.runner_installed);
    }

    #[test]
    fn missing_runner_keeps_interpreter() {
        let probe = ScriptedProbe::new().interpreter("python3", "3.12.0", None);
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let snapshot = detector.detect("python3").clone();

        assert_eq!(snapshot.interpreter_path.as_deref(), Some("python3"));
        assert!(!snapshot.runner_installed);
        assert_eq!(snapshot.runner_version, None);
    }

    #[test]
    fn runner_without_version_reports_installed() {
        let probe = ScriptedProbe::new()
            .respond("python", &["--version"], "Python 3.10.2")
            .respond("python", &["-m", "behave", "--version"], "behave (dev)");
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let snapshot = detector.detect("python").clone();
        assert_eq!(snapshot.runner_version.as_deref(), Some("installed"));
    }

    #[test]
    fn unparseable_interpreter_version_keeps_path() {
        let probe = ScriptedProbe::new().respond("pypy", &["--version"], "PyPy 7.3");
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let snapshot = detector.detect("pypy").clone();
        assert_eq!(snapshot.interpreter_path.as_deref(), Some("pypy"));
        assert_eq!(snapshot.version, None);
    }

    #[test]
    fn subscribe_delivers_empty_snapshot_before_detection() {
        let mut detector = EnvironmentDetector::new(Box::new(ScriptedProbe::new()));
        let (seen, observer) = recorder();

        detector.subscribe(observer);

        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_empty());
        assert_eq!(detector.detections(), 0);
    }

    #[test]
    fn observers_notified_in_registration_order() {
        let probe = ScriptedProbe::new().interpreter("python", "3.9.1", Some("1.2.6"));
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let order = Rc::new(RefCell::new(Vec::new()));

        for id in 0..3 {
            let order = Rc::clone(&order);
            detector.subscribe(Box::new(move |_: &EnvironmentSnapshot| {
                order.borrow_mut().push(id)
            }));
        }
        order.borrow_mut().clear();

        detector.detect("python");
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn reinitialize_replaces_snapshot_and_notifies_once() {
        let probe = ScriptedProbe::new()
            .interpreter("python3.11", "3.11.4", Some("1.2.6"))
            .interpreter("python3.12", "3.12.1", None);
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        detector.initialize(&config_with_python("python3.11"), &NoProvider);

        let (seen, observer) = recorder();
        detector.subscribe(observer);
        detector.initialize(&config_with_python("python3.12"), &NoProvider);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].interpreter_path.as_deref(), Some("python3.12"));
        assert_eq!(seen[1].version.as_deref(), Some("3.12.1"));
        assert!(!seen[1].runner_installed);
        assert_eq!(detector.snapshot(), seen[1]);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let probe = ScriptedProbe::new().interpreter("python", "3.9.1", Some("1.2.6"));
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        detector.detect("python");

        let mut copy = detector.snapshot();
        copy.runner_installed = false;
        assert!(detector.snapshot().runner_installed);
    }

    #[test]
    fn resolve_prefers_configured_path() {
        let provider = FixedProvider(Some(vec!["/venv/bin/python".to_string()]));
        assert_eq!(
            resolve_interpreter(&config_with_python("/opt/python"), &provider),
            "/opt/python"
        );
    }

    #[test]
    fn resolve_uses_first_element_of_provider_command() {
        let provider = FixedProvider(Some(vec![
            "/venv/bin/python".to_string(),
            "-X".to_string(),
            "dev".to_string(),
        ]));
        assert_eq!(
            resolve_interpreter(&BonnieConfig::default(), &provider),
            "/venv/bin/python"
        );
    }

    #[test]
    fn resolve_falls_back_to_python() {
        let config = BonnieConfig::default();
        assert_eq!(resolve_interpreter(&config, &NoProvider), "python");
        assert_eq!(resolve_interpreter(&config, &FixedProvider(Some(vec![]))), "python");
        assert_eq!(resolve_interpreter(&config, &FailingProvider), "python");
    }

    #[test]
    fn initialize_probes_fallback_when_unconfigured() {
        let probe = ScriptedProbe::new().interpreter("python", "3.8.10", Some("1.2.6"));
        let mut detector = EnvironmentDetector::new(Box::new(probe));
        let snapshot = detector
            .initialize(&BonnieConfig::default(), &FailingProvider)
            .clone();
        assert_eq!(snapshot.interpreter_path.as_deref(), Some("python"));
        assert_eq!(detector.detections(), 1);
    }
}
