//! Shell command execution and platform detection.

pub mod command;
pub mod platform;

pub use command::run_attached;
pub use platform::{is_ci, shell_executable, shell_flag, ShellType};
