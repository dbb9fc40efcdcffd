//! Report model
//!
//! Every command builds a `WordReport` (or a stats model) before rendering;
//! the renderer never reaches back into the tally.

use serde::{Deserialize, Serialize};

/// One row of the report: a distinct word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Metadata attached to a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Number of input files tallied.
    pub files: usize,

    /// Total word occurrences.
    pub total_words: usize,

    /// Number of distinct words (equals the row count).
    pub distinct_words: usize,

    /// XXH3 hash of the raw input content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// RFC 3339 timestamp of report generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// The complete report: input identifier plus sorted rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordReport {
    /// Display name of the input (file path or directory).
    pub source: String,

    /// Word/count rows in ascending lexicographic order.
    pub rows: Vec<WordCount>,

    pub meta: ReportMeta,
}

impl WordReport {
    pub fn new(source: impl Into<String>, rows: Vec<WordCount>) -> Self {
        let distinct = rows.len();
        let total = rows.iter().map(|r| r.count).sum();
        Self {
            source: source.into(),
            rows,
            meta: ReportMeta {
                files: 1,
                total_words: total,
                distinct_words: distinct,
                hash: None,
                generated_at: None,
            },
        }
    }

    pub fn with_files(mut self, files: usize) -> Self {
        self.meta.files = files;
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.meta.hash = Some(hash.into());
        self
    }

    pub fn with_generated_at(mut self, ts: impl Into<String>) -> Self {
        self.meta.generated_at = Some(ts.into());
        self
    }
}
