//! Status indicator text for the detected environment.
//!
//! The indicator starts out "detecting" and is updated with every snapshot
//! the detector delivers. An all-empty snapshot after detection means the
//! interpreter was not found.

use serde::Serialize;

use crate::environment::EnvironmentSnapshot;

const DETECTING_TEXT: &str = "Bonnie: Detecting...";
const NOT_FOUND_TEXT: &str = "Python not found";
const NOT_FOUND_TOOLTIP: &str = "Python interpreter not detected. Configure in settings.";

/// Coarse state of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Detecting,
    Detected,
    NotFound,
}

/// Text and tooltip describing the current environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    kind: StatusKind,
    text: String,
    tooltip: Option<String>,
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusIndicator {
    /// An indicator that has not received a snapshot yet.
    pub fn new() -> Self {
        Self {
            kind: StatusKind::Detecting,
            text: DETECTING_TEXT.to_string(),
            tooltip: None,
        }
    }

    /// Render the indicator for a snapshot.
    pub fn from_snapshot(snapshot: &EnvironmentSnapshot) -> Self {
        match &snapshot.interpreter_path {
            Some(path) => Self {
                kind: StatusKind::Detected,
                text: format!(
                    "Python {}",
                    snapshot.version.as_deref().unwrap_or("detected")
                ),
                tooltip: Some(format!(
                    "Python: {}\nBehave: {}",
                    path,
                    if snapshot.runner_installed {
                        "installed"
                    } else {
                        "not found"
                    }
                )),
            },
            None => Self {
                kind: StatusKind::NotFound,
                text: NOT_FOUND_TEXT.to_string(),
                tooltip: Some(NOT_FOUND_TOOLTIP.to_string()),
            },
        }
    }

    /// Replace the indicator contents with those for `snapshot`.
    pub fn update(&mut self, snapshot: &EnvironmentSnapshot) {
        *self = Self::from_snapshot(snapshot);
    }

    /// Which state the indicator shows.
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// The status bar text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hover text, if the current state has one.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(version: Option<&str>, behave: bool) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            interpreter_path: Some("/usr/bin/python3".to_string()),
            version: version.map(str::to_string),
            runner_installed: behave,
            runner_version: behave.then(|| "1.2.6".to_string()),
        }
    }

    #[test]
    fn starts_detecting() {
        let indicator = StatusIndicator::new();
        assert_eq!(indicator.kind(), StatusKind::Detecting);
        assert_eq!(indicator.text(), "Bonnie: Detecting...");
        assert_eq!(indicator.tooltip(), None);
    }

    #[test]
    fn detected_with_behave() {
        let indicator = StatusIndicator::from_snapshot(&detected(Some("3.11.4"), true));
        insta::assert_snapshot!(indicator.text(), @"Python 3.11.4");
        insta::assert_snapshot!(indicator.tooltip().unwrap(), @r"
        Python: /usr/bin/python3
        Behave: installed
        ");
    }

    #[test]
    fn detected_without_version_or_behave() {
        let indicator = StatusIndicator::from_snapshot(&detected(None, false));
        assert_eq!(indicator.text(), "Python detected");
        assert!(indicator.tooltip().unwrap().ends_with("Behave: not found"));
    }

    #[test]
    fn empty_snapshot_is_not_found() {
        let mut indicator = StatusIndicator::new();
        indicator.update(&EnvironmentSnapshot::default());
        assert_eq!(indicator.kind(), StatusKind::NotFound);
        assert_eq!(indicator.text(), "Python not found");
        assert_eq!(
            indicator.tooltip(),
            Some("Python interpreter not detected. Configure in settings.")
        );
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_value(StatusIndicator::new()).unwrap();
        assert_eq!(json["kind"], "detecting");
    }
}
