//! Feature files and scenario lookup.

pub mod document;
pub mod scenario;

pub use document::{is_feature_path, ActiveDocument, FEATURE_EXTENSION};
pub use scenario::{find_scenario_at, parse_heading, ScenarioTarget};
