//! Process-wide durable state.
//!
//! This module provides the [`GlobalState`] struct persisted at
//! `~/.bonnie/state.yml`. It only remembers whether the welcome message
//! has been shown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BonnieError, Result};

/// State shared by every workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    /// Whether the welcome message was shown.
    #[serde(default)]
    pub has_shown_welcome: bool,

    /// When the welcome message was shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_shown_at: Option<DateTime<Utc>>,
}

impl GlobalState {
    /// Get the state file path inside a user directory.
    pub fn file_path(user_dir: &Path) -> PathBuf {
        user_dir.join("state.yml")
    }

    /// Load state from disk; a missing file yields the default state.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| BonnieError::StateError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })
    }

    /// Save state to disk using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_yaml::to_string(self).map_err(|e| BonnieError::StateError {
            message: format!("Failed to serialize state: {}", e),
        })?;

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Record that the welcome message was shown.
    pub fn mark_welcome_shown(&mut self) {
        self.has_shown_welcome = true;
        self.welcome_shown_at = Some(Utc::now());
    }
}
