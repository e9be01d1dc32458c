//! Launching behave runs.
//!
//! - [`actions`] - the three run actions and their precondition chain
//! - [`compose`] - command-line composition
//! - [`terminal`] - where composed lines are sent
//!
//! # Example
//!
//! ```
//! use bonnie::config::BonnieConfig;
//! use bonnie::environment::EnvironmentSnapshot;
//! use bonnie::launcher::{Launcher, RecordingTerminal};
//! use bonnie::workspace::Workspace;
//! use std::path::PathBuf;
//!
//! let snapshot = EnvironmentSnapshot {
//!     interpreter_path: Some("python3".to_string()),
//!     version: Some("3.12.1".to_string()),
//!     runner_installed: true,
//!     runner_version: Some("1.2.6".to_string()),
//! };
//! let config = BonnieConfig::default();
//! let workspace = Workspace::new(vec![PathBuf::from("/work/app")]);
//! let mut terminal = RecordingTerminal::new();
//!
//! Launcher::new(&snapshot, &config, &workspace)
//!     .run_all_features(&mut terminal)
//!     .unwrap();
//! assert_eq!(terminal.last().unwrap().command_line, "\"python3\" -m behave");
//! ```

pub mod actions;
pub mod compose;
pub mod terminal;

pub use actions::{LaunchReport, Launcher, RunAction};
pub use compose::{compose_command, RunTarget};
pub use terminal::{EchoTerminal, RecordingTerminal, ShellTerminal, Terminal, TerminalRequest};
