//! Durable state and the user directory.
//!
//! Bonnie keeps user-level files (global config and [`GlobalState`]) in
//! `~/.bonnie`, or in `$BONNIE_HOME` when that variable is set.

pub mod global;

pub use global::GlobalState;

use std::path::PathBuf;

/// Environment variable that relocates the user directory.
pub const HOME_ENV: &str = "BONNIE_HOME";

/// The user directory, if one can be determined.
pub fn user_dir() -> Option<PathBuf> {
    user_dir_with_env(|key: &str| std::env::var(key))
}

/// Resolve the user directory with a custom env var lookup function.
pub fn user_dir_with_env<F>(env_fn: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match env_fn(HOME_ENV) {
        Ok(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".bonnie")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonnie_home_overrides_home_dir() {
        let dir = user_dir_with_env(|key| {
            if key == HOME_ENV {
                Ok("/tmp/bonnie-home".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });
        assert_eq!(dir, Some(PathBuf::from("/tmp/bonnie-home")));
    }

    #[test]
    fn default_lives_under_home() {
        let dir = user_dir_with_env(|_| Err(std::env::VarError::NotPresent));
        if let Some(dir) = dir {
            assert!(dir.ends_with(".bonnie"));
        }
    }
}
