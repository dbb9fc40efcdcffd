//! Statistics command - per-file and aggregate word statistics
//!
//! Reuses the same tokenizer/tally pipeline as the count command and reports
//! line, occurrence, and distinct-word totals plus the top-N words by count.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::model::WordCount;
use crate::core::paths::make_relative;
use crate::core::reader::read_text;
use crate::core::separators::SeparatorSet;
use crate::core::tally::WordTally;
use crate::scan::scan_files;

/// Statistics for a single file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStats {
    /// File path relative to the scanned root
    pub path: String,
    /// Line count
    pub lines: usize,
    /// Character count
    pub chars: usize,
    /// Total word occurrences
    pub words: usize,
    /// Distinct words
    pub distinct_words: usize,
}

/// Aggregate statistics over the whole input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputStats {
    /// Files tallied
    pub total_files: usize,
    /// Total lines
    pub total_lines: usize,
    /// Total characters
    pub total_chars: usize,
    /// Total word occurrences
    pub total_words: usize,
    /// Distinct words across all files (case-folded)
    pub distinct_words: usize,
    /// Most frequent words, count descending
    pub top_words: Vec<WordCount>,
    /// Per-file statistics
    pub file_stats: Vec<FileStats>,
}

/// Calculate statistics for one file's content.
fn file_stats(display_path: String, content: &str, separators: &SeparatorSet) -> FileStats {
    let mut tally = WordTally::new();
    tally.tally_text(content, separators);

    FileStats {
        path: display_path,
        lines: content.lines().count(),
        chars: content.chars().count(),
        words: tally.total(),
        distinct_words: tally.distinct(),
    }
}

/// Calculate statistics for a file or directory input.
pub fn calculate_stats(
    input: &Path,
    separators: &SeparatorSet,
    hidden: bool,
    respect_ignore: bool,
    top_n: usize,
) -> Result<InputStats> {
    let is_dir = input.is_dir();
    let files = if is_dir {
        scan_files(input, hidden, respect_ignore)?
    } else {
        vec![input.to_path_buf()]
    };

    let mut stats = InputStats::default();
    let mut aggregate = WordTally::new();

    for path in files {
        let text = match read_text(&path) {
            Ok(t) => t,
            Err(_) => continue,
        };

        let shown = if is_dir {
            make_relative(&path, input).unwrap_or_else(|| path.display().to_string())
        } else {
            path.display().to_string()
        };
        let per_file = file_stats(shown, &text.content, separators);

        stats.total_files += 1;
        stats.total_lines += per_file.lines;
        stats.total_chars += per_file.chars;
        stats.total_words += per_file.words;
        stats.file_stats.push(per_file);

        let mut tally = WordTally::new();
        tally.tally_text(&text.content, separators);
        aggregate.merge(tally);
    }

    stats.distinct_words = aggregate.distinct();
    stats.top_words = aggregate.top_rows(top_n);

    Ok(stats)
}

/// Stats output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// JSON object with full statistics
    Json,
    /// Markdown table format
    Table,
}

impl std::str::FromStr for StatsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "default" => Ok(StatsFormat::Summary),
            "json" => Ok(StatsFormat::Json),
            "table" | "md" => Ok(StatsFormat::Table),
            _ => Err(format!("Unknown stats format: {}", s)),
        }
    }
}

/// Run the stats command
pub fn run_stats(
    input: &Path,
    separators: &SeparatorSet,
    hidden: bool,
    respect_ignore: bool,
    stats_format: StatsFormat,
    top_n: usize,
    pretty: bool,
) -> Result<()> {
    let stats = calculate_stats(input, separators, hidden, respect_ignore, top_n)?;

    match stats_format {
        StatsFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(&stats)?
            } else {
                serde_json::to_string(&stats)?
            };
            println!("{}", json);
        }
        StatsFormat::Summary => {
            println!("Word Statistics");
            println!("═══════════════════════════════════════");
            println!("  Files:          {}", stats.total_files);
            println!("  Lines:          {}", stats.total_lines);
            println!("  Characters:     {}", stats.total_chars);
            println!("  Words:          {}", stats.total_words);
            println!("  Distinct words: {}", stats.distinct_words);
            println!("═══════════════════════════════════════");

            if !stats.top_words.is_empty() {
                println!("\nTop {} words:", stats.top_words.len());
                for row in &stats.top_words {
                    println!("  {:20} {}", row.word, row.count);
                }
            }
        }
        StatsFormat::Table => {
            println!("# Word Statistics\n");
            println!("| Metric | Value |");
            println!("|--------|-------|");
            println!("| Files | {} |", stats.total_files);
            println!("| Lines | {} |", stats.total_lines);
            println!("| Characters | {} |", stats.total_chars);
            println!("| Words | {} |", stats.total_words);
            println!("| Distinct words | {} |", stats.distinct_words);

            if !stats.file_stats.is_empty() {
                println!("\n## Files\n");
                println!("| File | Lines | Words | Distinct |");
                println!("|------|-------|-------|----------|");
                for f in &stats.file_stats {
                    println!(
                        "| {} | {} | {} | {} |",
                        f.path, f.lines, f.words, f.distinct_words
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seps() -> SeparatorSet {
        SeparatorSet::default()
    }

    #[test]
    fn test_stats_format_parse() {
        assert_eq!(
            "summary".parse::<StatsFormat>().unwrap(),
            StatsFormat::Summary
        );
        assert_eq!("json".parse::<StatsFormat>().unwrap(), StatsFormat::Json);
        assert_eq!("table".parse::<StatsFormat>().unwrap(), StatsFormat::Table);
        assert!("invalid".parse::<StatsFormat>().is_err());
    }

    #[test]
    fn test_stats_format_default() {
        assert_eq!(StatsFormat::default(), StatsFormat::Summary);
    }

    #[test]
    fn test_file_stats_counts() {
        let stats = file_stats(
            "test.txt".to_string(),
            "the cat\nthe mat\n",
            &seps(),
        );
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.distinct_words, 3);
    }

    #[test]
    fn test_calculate_stats_single_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "a a b\nc\n").unwrap();

        let stats = calculate_stats(&path, &seps(), false, true, 10).unwrap();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.total_lines, 2);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(stats.top_words[0].word, "a");
        assert_eq!(stats.top_words[0].count, 2);
    }

    #[test]
    fn test_calculate_stats_directory() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("one.txt"), "alpha beta").unwrap();
        fs::write(temp.path().join("two.txt"), "alpha gamma").unwrap();

        let stats = calculate_stats(temp.path(), &seps(), false, true, 1).unwrap();
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(stats.top_words.len(), 1);
        assert_eq!(stats.top_words[0].word, "alpha");
        assert_eq!(stats.file_stats.len(), 2);
    }

    #[test]
    fn test_calculate_stats_skips_unreadable() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("good.txt"), "word").unwrap();
        fs::write(temp.path().join("bad.bin"), [0u8, 1, 0]).unwrap();

        let stats = calculate_stats(temp.path(), &seps(), false, true, 10).unwrap();
        assert_eq!(stats.total_files, 1);
    }

    #[test]
    fn test_input_stats_default() {
        let stats = InputStats::default();
        assert_eq!(stats.total_files, 0);
        assert!(stats.top_words.is_empty());
        assert!(stats.file_stats.is_empty());
    }
}
