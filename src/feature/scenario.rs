//! Locating the scenario that encloses a cursor line.

use regex::Regex;
use std::sync::LazyLock;

static SCENARIO_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Scenario|Scenario Outline):\s*(.+)$").unwrap());

/// A scenario heading found in a feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioTarget {
    /// Scenario name as written after the keyword.
    pub name: String,
    /// 1-based line number of the heading, as behave expects it.
    pub line: usize,
}

/// Parse a single line as a scenario heading.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_heading(line: &str) -> Option<String> {
    SCENARIO_HEADING
        .captures(line.trim())
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Scan backward from `cursor` (0-based) for the nearest scenario heading.
///
/// The cursor line itself is checked first. A cursor past the end of the
/// document starts from the last line. Returns `None` when the scan reaches
/// the top of the file without a match.
pub fn find_scenario_at<S: AsRef<str>>(lines: &[S], cursor: usize) -> Option<ScenarioTarget> {
    if lines.is_empty() {
        return None;
    }
    let start = cursor.min(lines.len() - 1);

    (0..=start).rev().find_map(|index| {
        parse_heading(lines[index].as_ref()).map(|name| ScenarioTarget {
            name,
            line: index + 1,
        })
    })
}
