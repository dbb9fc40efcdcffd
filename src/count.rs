//! Count command - tally words and render the report
//!
//! Accepts a single file or a directory. Directory runs aggregate the
//! tallies of every text file beneath the root (stable path order); binary
//! and unreadable files are skipped with a warning instead of aborting.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::WordReport;
use crate::core::paths::make_relative;
use crate::core::reader::{read_text, ReadError};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::separators::SeparatorSet;
use crate::core::tally::WordTally;
use crate::core::util::{hash_bytes, timestamp_rfc3339};
use crate::scan::scan_files;

/// Print a skip warning unless quiet mode is on.
fn warn_skip(quiet: bool, message: &str) {
    if !quiet {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}

/// Tally a single input file. Fatal on read failure.
fn tally_file(path: &Path, separators: &SeparatorSet) -> Result<(WordTally, String)> {
    let text = read_text(path).with_context(|| format!("Failed to read input: {:?}", path))?;

    let mut tally = WordTally::new();
    tally.tally_text(&text.content, separators);

    Ok((tally, hash_bytes(text.content.as_bytes())))
}

/// Tally one file of a directory run, or None if the file was skipped.
fn tally_entry(path: &Path, separators: &SeparatorSet) -> Result<WordTally, ReadError> {
    let text = read_text(path)?;
    let mut tally = WordTally::new();
    tally.tally_text(&text.content, separators);
    Ok(tally)
}

#[cfg(feature = "parallel")]
fn tally_entries(
    files: &[PathBuf],
    separators: &SeparatorSet,
) -> Vec<(PathBuf, Result<WordTally, ReadError>)> {
    use rayon::prelude::*;
    files
        .par_iter()
        .map(|path| (path.clone(), tally_entry(path, separators)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn tally_entries(
    files: &[PathBuf],
    separators: &SeparatorSet,
) -> Vec<(PathBuf, Result<WordTally, ReadError>)> {
    files
        .iter()
        .map(|path| (path.clone(), tally_entry(path, separators)))
        .collect()
}

/// Aggregate every text file under `root` into a single tally.
///
/// Per-file tallies are merged in path order, so the aggregate is
/// deterministic whether or not the parallel feature is enabled.
fn tally_dir(
    root: &Path,
    separators: &SeparatorSet,
    hidden: bool,
    respect_ignore: bool,
    quiet: bool,
) -> Result<(WordTally, usize)> {
    let files = scan_files(root, hidden, respect_ignore)?;
    let results = tally_entries(&files, separators);

    let mut aggregate = WordTally::new();
    let mut tallied = 0usize;

    for (path, result) in results {
        match result {
            Ok(tally) => {
                aggregate.merge(tally);
                tallied += 1;
            }
            Err(err) => {
                let shown = make_relative(&path, root).unwrap_or_else(|| path.display().to_string());
                warn_skip(quiet, &format!("skipping {}: {}", shown, err));
            }
        }
    }

    Ok((aggregate, tallied))
}

/// Build the report for a file or directory input.
pub fn build_report(
    input: &Path,
    separators: &SeparatorSet,
    hidden: bool,
    respect_ignore: bool,
    quiet: bool,
) -> Result<WordReport> {
    let source = input.display().to_string();

    let report = if input.is_dir() {
        let (tally, files) = tally_dir(input, separators, hidden, respect_ignore, quiet)?;
        WordReport::new(source, tally.into_sorted_rows()).with_files(files)
    } else {
        let (tally, hash) = tally_file(input, separators)?;
        WordReport::new(source, tally.into_sorted_rows()).with_hash(hash)
    };

    Ok(report.with_generated_at(timestamp_rfc3339()))
}

/// Run the count command.
#[allow(clippy::too_many_arguments)]
pub fn run_count(
    input: &Path,
    output: Option<&Path>,
    separators: &SeparatorSet,
    hidden: bool,
    respect_ignore: bool,
    quiet: bool,
    verbose: bool,
    config: RenderConfig,
) -> Result<()> {
    let report = build_report(input, separators, hidden, respect_ignore, quiet)?;

    if verbose && !quiet {
        eprintln!(
            "{} {} file(s), {} occurrence(s), {} distinct word(s)",
            "tallied".green().bold(),
            report.meta.files,
            report.meta.total_words,
            report.meta.distinct_words,
        );
    }

    let renderer = Renderer::with_config(config);
    let rendered = renderer.render(&report);

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write report: {:?}", path))?,
        None => println!("{}", rendered),
    }

    Ok(())
}
