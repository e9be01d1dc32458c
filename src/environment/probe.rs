//! Subprocess probes used by environment detection.
//!
//! A [`Probe`] runs a program and hands back its output only when the
//! program both spawned and exited successfully. Every other outcome is
//! `None`; detection never sees an error.

use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::process::Command;
use std::rc::Rc;
use std::sync::LazyLock;

static PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python (\d+\.\d+\.\d+)").unwrap());

static SEMVER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+)").unwrap());

/// Runs a program and returns its output on success.
pub trait Probe {
    /// Run `program` with `args`.
    ///
    /// Returns `None` if the program could not be started or exited with a
    /// non-zero status.
    fn run(&self, program: &str, args: &[&str]) -> Option<String>;
}

/// Probe backed by real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to start {}: {}", program, e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "{} {} exited with {:?}",
                program,
                args.join(" "),
                output.status.code()
            );
            return None;
        }

        // Python 2 and some launchers print --version to stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            Some(String::from_utf8_lossy(&output.stderr).to_string())
        } else {
            Some(stdout.to_string())
        }
    }
}

/// Probe with canned responses, for tests and dry runs.
///
/// Unscripted invocations fail. Every invocation is recorded.
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedProbe {
    /// Create a probe where every invocation fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program args...` succeed with `output`.
    pub fn respond(mut self, program: &str, args: &[&str], output: &str) -> Self {
        self.responses
            .insert(Self::key(program, args), output.to_string());
        self
    }

    /// Script a working interpreter, optionally with behave installed.
    pub fn interpreter(self, program: &str, version: &str, behave: Option<&str>) -> Self {
        let probe = self.respond(program, &["--version"], &format!("Python {}\n", version));
        match behave {
            Some(behave_version) => probe.respond(
                program,
                &["-m", "behave", "--version"],
                &format!("behave {}\n", behave_version),
            ),
            None => probe,
        }
    }

    /// Invocations seen so far, as `program arg arg`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn key(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Probe for ScriptedProbe {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let key = Self::key(program, args);
        self.calls.borrow_mut().push(key.clone());
        self.responses.get(&key).cloned()
    }
}

impl<P: Probe + ?Sized> Probe for Rc<P> {
    fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        (**self).run(program, args)
    }
}

/// Extract the interpreter version from `python --version` output.
pub fn extract_python_version(output: &str) -> Option<String> {
    PYTHON_VERSION
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the first `major.minor.patch` version from runner output.
pub fn extract_runner_version(output: &str) -> Option<String> {
    SEMVER
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_python_version() {
        assert_eq!(
            extract_python_version("Python 3.11.4\n"),
            Some("3.11.4".to_string())
        );
    }

    #[test]
    fn python_version_requires_prefix() {
        assert_eq!(extract_python_version("3.11.4"), None);
        assert_eq!(extract_python_version("Python 3.11"), None);
    }

    #[test]
    fn extracts_runner_version() {
        assert_eq!(
            extract_runner_version("behave 1.2.6"),
            Some("1.2.6".to_string())
        );
        assert_eq!(
            extract_runner_version("behave v1.2.7.dev5"),
            Some("1.2.7".to_string())
        );
        assert_eq!(extract_runner_version("behave dev"), None);
    }

    #[test]
    fn system_probe_missing_program_is_none() {
        assert!(SystemProbe
            .run("this-command-does-not-exist-12345", &["--version"])
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn system_probe_nonzero_exit_is_none() {
        assert!(SystemProbe.run("sh", &["-c", "exit 3"]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn system_probe_falls_back_to_stderr() {
        let output = SystemProbe
            .run("sh", &["-c", "echo 'Python 2.7.18' >&2"])
            .unwrap();
        assert_eq!(extract_python_version(&output), Some("2.7.18".to_string()));
    }

    #[test]
    fn scripted_probe_records_calls_and_fails_unscripted() {
        let probe = ScriptedProbe::new().interpreter("python3", "3.12.0", None);
        assert!(probe.run("python3", &["--version"]).is_some());
        assert!(probe.run("python3", &["-m", "behave", "--version"]).is_none());
        assert_eq!(
            probe.calls(),
            vec!["python3 --version", "python3 -m behave --version"]
        );
    }
}
