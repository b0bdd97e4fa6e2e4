//! Instruction blob splitting.

use regex::Regex;
use std::sync::OnceLock;

/// Split a free-text instructions blob into ordered, non-empty steps.
///
/// Lines are trimmed and a single leading ordinal or bullet marker
/// ("1.", "2)", "-") is stripped; the same characters mid-line are left
/// alone. Line order is preserved, steps are sequential by nature.
pub fn clean_steps(raw: Option<&str>) -> Vec<String> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = MARKER.get_or_init(|| Regex::new(r"^\s*(?:\d+[.)]|-)\s*").unwrap());

    let raw = match raw {
        Some(s) => s,
        None => return Vec::new(),
    };

    let ascii: String = raw.chars().filter(char::is_ascii).collect();

    ascii
        .trim()
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let step = marker.replace(line, "").trim().to_string();
            if step.is_empty() {
                None
            } else {
                Some(step)
            }
        })
        .collect()
}
