//! Composing `behave` command lines.

use crate::environment::RUNNER_MODULE;

/// What a run should execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTarget {
    /// Every feature under the working directory.
    AllFeatures,
    /// One feature file, relative to the working directory.
    Feature { path: String },
    /// One scenario, addressed by its 1-based heading line.
    Scenario { path: String, line: usize },
}

impl RunTarget {
    /// The locator passed to behave, if any.
    pub fn locator(&self) -> Option<String> {
        match self {
            Self::AllFeatures => None,
            Self::Feature { path } => Some(path.clone()),
            Self::Scenario { path, line } => Some(format!("{}:{}", path, line)),
        }
    }
}

/// Compose the shell line for a behave run.
///
/// Shape: `"<interpreter>" -m behave ["<locator>"] <extra args...>`. The
/// interpreter and locator are double-quoted; extra arguments are appended
/// verbatim and unescaped, in order.
pub fn compose_command(interpreter: &str, target: &RunTarget, extra_args: &[String]) -> String {
    let mut parts = vec![
        quote(interpreter),
        "-m".to_string(),
        RUNNER_MODULE.to_string(),
    ];

    if let Some(locator) = target.locator() {
        parts.push(quote(&locator));
    }

    parts.extend(extra_args.iter().cloned());

    parts.join(" ")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}
