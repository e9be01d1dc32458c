//! Open workspace folders.
//!
//! A [`Workspace`] is the ordered list of folders a run can target. The
//! first folder is where "run all features" executes; file-scoped runs
//! execute in the folder that contains the file.

use std::path::{Component, Path, PathBuf};

/// The set of open workspace folders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    folders: Vec<PathBuf>,
}

impl Workspace {
    /// Create a workspace from absolute folder paths.
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self {
            folders: folders.iter().map(|f| normalize(f)).collect(),
        }
    }

    /// A workspace with no folders open.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a workspace, resolving relative folders against `base`.
    pub fn from_paths(base: &Path, folders: &[PathBuf]) -> Self {
        Self::new(folders.iter().map(|f| absolutize(base, f)).collect())
    }

    /// All open folders, in the order they were opened.
    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    /// Whether no folder is open.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// The first open folder.
    pub fn first_folder(&self) -> Option<&Path> {
        self.folders.first().map(PathBuf::as_path)
    }

    /// The folder containing `path`; the deepest one wins for nested folders.
    pub fn folder_for(&self, path: &Path) -> Option<&Path> {
        let path = normalize(path);
        self.folders
            .iter()
            .filter(|folder| path.starts_with(folder))
            .max_by_key(|folder| folder.components().count())
            .map(PathBuf::as_path)
    }

    /// `path` relative to its containing folder, with `/` separators.
    pub fn relative_path(&self, path: &Path) -> Option<String> {
        let folder = self.folder_for(path)?;
        let path = normalize(path);
        let relative = path.strip_prefix(folder).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        Some(parts.join("/"))
    }
}

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically remove `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
