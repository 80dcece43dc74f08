//! Data models for the animation rubric grader.
//!
//! This module contains all the core data structures used throughout
//! the application for representing animation records, per-file
//! keyframe summaries, and rubric judgments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Classification of a keyframe selector.
///
/// Keyframe rules select a point on the animation timeline either by
/// percentage (`0%`, `50%`) or by the keywords `from`/`to`. Anything
/// else is carried as [`SelectorKind::Other`] so richer keyframe
/// vocabularies don't break grading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Percentage,
    From,
    To,
    Other(String),
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Percentage => write!(f, "percentage"),
            SelectorKind::From => write!(f, "from"),
            SelectorKind::To => write!(f, "to"),
            SelectorKind::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for SelectorKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "percentage" => SelectorKind::Percentage,
            "from" => SelectorKind::From,
            "to" => SelectorKind::To,
            other => SelectorKind::Other(other.to_string()),
        }
    }
}

/// One group of keyframe entries inside a `@keyframes` block, keyed by
/// selector kind.
///
/// `frames` holds the raw selector texts (e.g. `["0%", "50%", "100%"]`);
/// its length is the number of keyframe entries of that kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframeGroup {
    /// Selector kind as reported by the extractor ("percentage", "from", "to", ...).
    pub selector: String,
    /// Raw keyframe selector texts of that kind.
    pub frames: Vec<String>,
}

impl KeyframeGroup {
    /// Creates a group from a selector kind and its frame texts.
    pub fn new(selector: &str, frames: Vec<String>) -> Self {
        Self {
            selector: selector.to_string(),
            frames,
        }
    }

    /// Returns the classified selector kind.
    pub fn kind(&self) -> SelectorKind {
        SelectorKind::from(self.selector.as_str())
    }
}

/// One `@keyframes` block discovered in a stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationRecord {
    /// Source file the block came from (relative to the project root).
    pub file: String,
    /// The `@keyframes` identifier, if the extractor reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Keyframe entries grouped by selector kind, in source order.
    pub keyframes: Vec<KeyframeGroup>,
    /// CSS property names the animation's declarations modify.
    pub values_targetted: HashSet<String>,
}

impl AnimationRecord {
    /// Creates a record with no keyframes or targeted properties.
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            name: None,
            keyframes: Vec::new(),
            values_targetted: HashSet::new(),
        }
    }
}

/// Keyframe counts for a single source file, produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileKeyframeSummary {
    /// Source file the counts belong to.
    pub file: String,
    /// Number of percentage-based keyframe entries across the file's animations.
    pub pct_keyframes: usize,
    /// Number of `from`/`to` keyframe entries across the file's animations.
    pub from_to_keyframes: usize,
}

impl FileKeyframeSummary {
    /// Creates an empty summary for a file.
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            pct_keyframes: 0,
            from_to_keyframes: 0,
        }
    }

    /// Combined keyframe count across both kinds.
    pub fn total(&self) -> usize {
        self.pct_keyframes + self.from_to_keyframes
    }
}

/// A single rubric judgment message, tagged `pass: ...` or `fail: ...`.
///
/// Downstream assertion layers only inspect the leading characters of the
/// message, so the tag is part of the message text itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Judgment(String);

impl Judgment {
    /// Creates a passing judgment.
    pub fn pass(message: impl fmt::Display) -> Self {
        Judgment(format!("pass: {}", message))
    }

    /// Creates a failing judgment.
    pub fn fail(message: impl fmt::Display) -> Self {
        Judgment(format!("fail: {}", message))
    }

    /// Whether the message carries the `pass` tag.
    ///
    /// Checked against the leading characters only, matching how
    /// assertion layers consume these messages.
    pub fn is_pass(&self) -> bool {
        self.0.starts_with("pass")
    }

    /// The full message text, tag included.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata about a grading run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the inventory that was graded.
    pub inventory: String,
    /// Date and time of the grading run.
    pub generated_at: DateTime<Utc>,
    /// Percentage-keyframe goal in effect (exclusive).
    pub pct_goal: usize,
    /// Overall keyframe goal in effect (inclusive).
    pub overall_goal: usize,
    /// Targeted-property count goal in effect.
    pub property_goal: usize,
    /// Required properties in effect (empty when the count goal applies).
    pub required: Vec<String>,
    /// Number of files graded.
    pub files_graded: usize,
    /// Number of rubric checks that passed.
    pub checks_passed: usize,
    /// Number of rubric checks that failed.
    pub checks_failed: usize,
}

/// The complete rubric grading report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricReport {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Per-file keyframe summaries.
    pub summaries: Vec<FileKeyframeSummary>,
    /// Number of `@keyframes` blocks per source file.
    pub animations: std::collections::HashMap<String, usize>,
    /// Judgments from the keyframe-count check.
    pub keyframe_judgments: Vec<Judgment>,
    /// Judgments from the targeted-property check.
    pub property_judgments: Vec<Judgment>,
}

impl RubricReport {
    /// Recomputes the pass/fail tallies in the metadata from the judgments.
    pub fn tally_checks(&mut self) {
        let all = self
            .keyframe_judgments
            .iter()
            .chain(self.property_judgments.iter());

        let mut passed = 0;
        let mut failed = 0;
        for judgment in all {
            if judgment.is_pass() {
                passed += 1;
            } else {
                failed += 1;
            }
        }

        self.metadata.checks_passed = passed;
        self.metadata.checks_failed = failed;
    }

    /// Whether every rubric check passed.
    pub fn all_passed(&self) -> bool {
        self.keyframe_judgments
            .iter()
            .chain(self.property_judgments.iter())
            .all(Judgment::is_pass)
    }
}
