//! The document a file-scoped run targets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::scenario::{find_scenario_at, ScenarioTarget};

/// File extension that marks a feature file.
pub const FEATURE_EXTENSION: &str = "feature";

/// An open document and the line the cursor sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    path: PathBuf,
    lines: Vec<String>,
    cursor_line: usize,
}

impl ActiveDocument {
    /// Build a document from in-memory text.
    ///
    /// `cursor_line` is 0-based.
    pub fn from_text(path: impl Into<PathBuf>, text: &str, cursor_line: usize) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_string).collect(),
            cursor_line,
        }
    }

    /// Read a document from disk.
    pub fn open(path: &Path, cursor_line: usize) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(path, &text, cursor_line))
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines of the document, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 0-based cursor line.
    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    /// Whether this is a feature file.
    pub fn is_feature_file(&self) -> bool {
        is_feature_path(&self.path)
    }

    /// The scenario enclosing the cursor, if any.
    pub fn scenario_at_cursor(&self) -> Option<ScenarioTarget> {
        find_scenario_at(&self.lines, self.cursor_line)
    }
}

/// Whether `path` has the `.feature` extension (case-insensitive).
pub fn is_feature_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(FEATURE_EXTENSION))
        .unwrap_or(false)
}
