//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command shares one
//! [`CommandContext`] holding the workspace, config sources and the
//! detection collaborators.

pub mod completions;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod run;
pub mod status;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
