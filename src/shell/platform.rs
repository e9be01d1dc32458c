//! Platform-specific shell detection.

use std::path::PathBuf;

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }
}

/// The user's shell executable.
pub fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

/// Get the flag to pass a command line to `shell`.
///
/// Uses `-lic` (interactive login shell) on Unix so that virtualenv and
/// pyenv activations from `.bashrc`/`.zshrc` apply. In CI, uses `-lc` to
/// avoid job-control errors without a TTY.
pub fn shell_flag(shell: ShellType) -> &'static str {
    match shell {
        ShellType::Cmd => "/C",
        ShellType::PowerShell => "-Command",
        _ if cfg!(target_os = "windows") => "/C",
        _ if is_ci() => "-lc",
        _ => "-lic",
    }
}

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var(var).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(ShellType::from_executable("/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::from_executable("/usr/bin/zsh"), ShellType::Zsh);
        assert_eq!(ShellType::from_executable("/usr/bin/fish"), ShellType::Fish);
        assert_eq!(ShellType::from_executable("pwsh"), ShellType::PowerShell);
        assert_eq!(ShellType::from_executable("cmd.exe"), ShellType::Cmd);
        assert_eq!(ShellType::from_executable("unknown"), ShellType::Unknown);
    }

    #[test]
    fn windows_shells_use_their_own_flags() {
        assert_eq!(shell_flag(ShellType::Cmd), "/C");
        assert_eq!(shell_flag(ShellType::PowerShell), "-Command");
    }

    #[cfg(unix)]
    #[test]
    fn unix_shells_run_as_login_shells() {
        assert!(shell_flag(ShellType::Bash).starts_with("-l"));
    }

    #[test]
    fn shell_executable_is_not_empty() {
        assert!(!shell_executable().as_os_str().is_empty());
    }
}
