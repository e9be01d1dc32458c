//! Shell command execution.

use std::io;
use std::path::Path;
use std::process::Command;

use super::platform::{shell_executable, shell_flag, ShellType};

/// Run `command` through the user's shell in `cwd`, attached to this
/// process's stdio, and wait for it.
///
/// Returns the exit code (`None` if killed by a signal). Errors only when
/// the shell itself cannot be started.
pub fn run_attached(command: &str, cwd: &Path) -> io::Result<Option<i32>> {
    let shell = shell_executable();
    let flag = shell_flag(ShellType::from_executable(&shell.to_string_lossy()));

    let status = Command::new(&shell)
        .arg(flag)
        .arg(command)
        .current_dir(cwd)
        .status()?;

    Ok(status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn returns_exit_code() {
        let code = run_attached("exit 3", &std::env::temp_dir()).unwrap();
        assert_eq!(code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let code = run_attached("test -f marker || exit 9", temp.path()).unwrap();
        assert_eq!(code, Some(9));

        std::fs::write(temp.path().join("marker"), "").unwrap();
        let code = run_attached("test -f marker || exit 9", temp.path()).unwrap();
        assert_eq!(code, Some(0));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(run_attached("echo hi", Path::new("/nonexistent/dir/for/bonnie")).is_err());
    }
}
