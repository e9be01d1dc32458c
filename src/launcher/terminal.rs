//! Terminals that receive composed command lines.
//!
//! The dispatcher hands each run to a [`Terminal`] and forgets about it:
//! output and exit status are never read back.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{BonnieError, Result};
use crate::shell;

/// A request to run one command line in a fresh terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRequest {
    /// Display name of the terminal.
    pub name: String,
    /// Working directory.
    pub cwd: PathBuf,
    /// The shell line to run.
    pub command_line: String,
}

/// Something that can open a terminal and send it a command line.
pub trait Terminal {
    /// Open a terminal for `request` and send its command line.
    fn send(&mut self, request: &TerminalRequest) -> Result<()>;
}

/// Runs the command line through the user's shell with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellTerminal;

impl Terminal for ShellTerminal {
    fn send(&mut self, request: &TerminalRequest) -> Result<()> {
        tracing::info!("{}: {}", request.name, request.command_line);
        let status = shell::run_attached(&request.command_line, &request.cwd).map_err(|e| {
            tracing::debug!("Shell failed to start: {}", e);
            BonnieError::TerminalFailed {
                command: request.command_line.clone(),
            }
        })?;
        tracing::debug!("{} finished with {:?}", request.name, status);
        Ok(())
    }
}

/// Prints the command line instead of running it.
pub struct EchoTerminal<W: Write> {
    out: W,
}

impl EchoTerminal<std::io::Stdout> {
    /// Echo to standard output.
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> EchoTerminal<W> {
    /// Echo to an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the terminal and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for EchoTerminal<W> {
    fn send(&mut self, request: &TerminalRequest) -> Result<()> {
        writeln!(self.out, "{}", request.command_line)?;
        Ok(())
    }
}

/// Records requests without running anything.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    requests: Vec<TerminalRequest>,
}

impl RecordingTerminal {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far.
    pub fn requests(&self) -> &[TerminalRequest] {
        &self.requests
    }

    /// The most recent request.
    pub fn last(&self) -> Option<&TerminalRequest> {
        self.requests.last()
    }
}

impl Terminal for RecordingTerminal {
    fn send(&mut self, request: &TerminalRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(command_line: &str) -> TerminalRequest {
        TerminalRequest {
            name: "Bonnie - Run All Features".to_string(),
            cwd: std::env::temp_dir(),
            command_line: command_line.to_string(),
        }
    }

    #[test]
    fn echo_terminal_writes_line() {
        let mut terminal = EchoTerminal::new(Vec::new());
        terminal.send(&request("\"python\" -m behave")).unwrap();
        let written = String::from_utf8(terminal.into_inner()).unwrap();
        assert_eq!(written, "\"python\" -m behave\n");
    }

    #[test]
    fn recording_terminal_keeps_order() {
        let mut terminal = RecordingTerminal::new();
        terminal.send(&request("first")).unwrap();
        terminal.send(&request("second")).unwrap();
        assert_eq!(terminal.requests().len(), 2);
        assert_eq!(terminal.last().unwrap().command_line, "second");
    }

    #[cfg(unix)]
    #[test]
    fn shell_terminal_ignores_exit_status() {
        let mut terminal = ShellTerminal;
        assert!(terminal.send(&request("exit 4")).is_ok());
    }

    #[test]
    fn shell_terminal_reports_missing_cwd() {
        let mut terminal = ShellTerminal;
        let req = TerminalRequest {
            name: "Bonnie - Run Feature".to_string(),
            cwd: PathBuf::from("/nonexistent/workspace/dir"),
            command_line: "echo hi".to_string(),
        };
        let err = terminal.send(&req).unwrap_err();
        assert!(matches!(err, BonnieError::TerminalFailed { .. }));
    }
}
