//! Free-text cell normalization.
//!
//! Every routine here is total: bad input degrades to an empty list, an empty
//! string, or `None`, never to an error.

use regex::Regex;
use std::sync::LazyLock;

/// A bullet line: a hyphen marker followed by its content
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s*(.+)$").expect("valid bullet regex"));

/// Split a comma-separated tag cell.
///
/// Pieces are trimmed and empty pieces dropped. Order and duplicates are kept.
pub fn norm_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an integer cell, `None` on anything that is not an integer.
///
/// Only ASCII digits with an optional sign are accepted. Digit separators
/// (`2_020`), non-ASCII digits and values outside `i64` all yield `None`.
pub fn safe_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Split a multi-line cell into bullets.
///
/// Lines of the form `- text` yield `text`. Lines without a leading hyphen
/// are kept verbatim as their own bullet. Blank lines are dropped.
pub fn split_hyphen_lines(s: &str) -> Vec<String> {
    let unified = s.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match BULLET_RE.captures(line) {
            Some(caps) => caps
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or(line)
                .to_string(),
            None => line.to_string(),
        })
        .filter(|bullet| !bullet.is_empty())
        .collect()
}

/// Keep a rating cell as trimmed text
pub fn parse_likert(s: &str) -> String {
    s.trim().to_string()
}
