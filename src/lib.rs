//! Bonnie - a Behave BDD development companion.
//!
//! Bonnie detects a Python interpreter and the `behave` test runner, then
//! launches runs for every feature, a single feature file, or the scenario
//! enclosing a given line.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`environment`] - Interpreter and runner detection
//! - [`error`] - Error types and result aliases
//! - [`feature`] - Feature documents and scenario lookup
//! - [`launcher`] - Run actions, command composition and terminals
//! - [`session`] - Activation lifecycle
//! - [`shell`] - Shell command execution
//! - [`state`] - User directory and durable state
//! - [`status`] - Status indicator text
//! - [`ui`] - Spinners and terminal output
//! - [`workspace`] - Open workspace folders
//!
//! # Example
//!
//! ```
//! use bonnie::feature::find_scenario_at;
//!
//! let lines = ["Feature: Cart", "  Scenario: Add item", "    Given an empty cart"];
//! let target = find_scenario_at(&lines, 2).unwrap();
//! assert_eq!(target.name, "Add item");
//! assert_eq!(target.line, 2);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod feature;
pub mod launcher;
pub mod session;
pub mod shell;
pub mod state;
pub mod status;
pub mod ui;
pub mod workspace;

pub use error::{BonnieError, Result};
