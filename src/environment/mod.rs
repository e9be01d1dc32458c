//! Python interpreter and behave detection.
//!
//! The interpreter is resolved in this order:
//!
//! 1. Configured `pythonPath`
//! 2. The companion [`InterpreterProvider`] (active virtual environment)
//! 3. Fallback to `python`
//!
//! Detection then runs `<python> --version` and
//! `<python> -m behave --version` and stores the result as an
//! [`EnvironmentSnapshot`].
//!
//! # Example
//!
//! ```
//! use bonnie::environment::{EnvironmentDetector, ScriptedProbe};
//!
//! let probe = ScriptedProbe::new().interpreter("python3", "3.12.1", Some("1.2.6"));
//! let mut detector = EnvironmentDetector::new(Box::new(probe));
//! detector.detect("python3");
//!
//! let snapshot = detector.snapshot();
//! assert_eq!(snapshot.version.as_deref(), Some("3.12.1"));
//! assert!(snapshot.runner_installed);
//! ```

pub mod detector;
pub mod probe;
pub mod provider;
pub mod snapshot;

pub use detector::{
    resolve_interpreter, EnvironmentDetector, Observer, FALLBACK_INTERPRETER, RUNNER_MODULE,
};
pub use probe::{extract_python_version, extract_runner_version, Probe, ScriptedProbe, SystemProbe};
pub use provider::{interpreter_candidates, ActiveEnvironmentProvider, InterpreterProvider, NoProvider};
pub use snapshot::EnvironmentSnapshot;
