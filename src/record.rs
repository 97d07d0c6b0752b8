//! Output record assembly.
//!
//! [`PaperRecord::from_row`] is a pure function of one CSV row and its
//! 1-based position; no state is carried between rows.

use crate::headers::{Field, HeaderIndex};
use crate::normalize::{norm_tags, parse_likert, safe_int, split_hyphen_lines};
use csv::StringRecord;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Runs of characters that cannot appear in an id slug
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Maximum length of the title part of an id
const MAX_SLUG_LEN: usize = 80;

/// One normalized reading-log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub year_published: Option<i64>,
    pub date_started: String,
    pub status: String,
    pub tags: Vec<String>,
    pub clarity_quality: String,
    pub relevance: String,
    pub main_finding: Vec<String>,
    pub interesting_points: Vec<String>,
}

impl PaperRecord {
    /// Assemble a record from a CSV row.
    ///
    /// `row_index` is 1-based and only used for the `paper-<n>` fallback id.
    pub fn from_row(index: &HeaderIndex, row: &StringRecord, row_index: usize) -> Self {
        let title = index.get(row, Field::Title).to_string();
        let year_published = safe_int(index.get(row, Field::Year));

        let id = make_id(&title, year_published).unwrap_or_else(|| fallback_id(row_index));

        Self {
            id,
            title,
            year_published,
            date_started: index.get(row, Field::DateStarted).to_string(),
            status: index.get(row, Field::Status).to_string(),
            tags: norm_tags(index.get(row, Field::Tags)),
            clarity_quality: parse_likert(index.get(row, Field::Clarity)),
            relevance: parse_likert(index.get(row, Field::Relevance)),
            main_finding: split_hyphen_lines(index.get(row, Field::MainFinding)),
            interesting_points: split_hyphen_lines(index.get(row, Field::Interesting)),
        }
    }
}

/// Build a stable id from title and year.
///
/// The slug is the lowercased title with every run of characters outside
/// `[a-z0-9]` collapsed to one hyphen, trimmed of hyphens and cut to 80
/// characters. A present year is always appended as `-<year>`, even onto an
/// empty slug. Returns `None` only when the slug is empty and there is no year.
pub fn make_id(title: &str, year: Option<i64>) -> Option<String> {
    let lowered = title.trim().to_lowercase();
    let slug = NON_SLUG_RE.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    // The slug is pure ASCII here, so byte and char boundaries agree
    let slug = &slug[..slug.len().min(MAX_SLUG_LEN)];

    match year {
        // Any parsed year counts, including 0
        Some(year) => Some(format!("{}-{}", slug, year)),
        None if slug.is_empty() => None,
        None => Some(slug.to_string()),
    }
}

/// Positional id used when a row has neither a usable title nor a year
pub fn fallback_id(row_index: usize) -> String {
    format!("paper-{}", row_index)
}
