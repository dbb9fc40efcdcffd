//! Word tally - case-insensitive occurrence counting over tokenized lines
//!
//! `WordTally` keeps two views of the same data: the distinct words in the
//! order they were first seen, and a word -> count map. The set of listed
//! words always equals the map's key set, and every count is at least 1.
//! Sorting happens only when rows are extracted; the counts are keyed by
//! value, so extraction does not disturb them.

use std::collections::HashMap;
use std::io::BufRead;

use crate::core::model::WordCount;
use crate::core::separators::SeparatorSet;
use crate::core::tokenizer::tokenize;

/// Occurrence tally of distinct, case-folded words.
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    /// Distinct words in first-seen order.
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`. The word is Unicode-lowercased
    /// before dedup and counting, so "The" and "the" tally together.
    pub fn observe(&mut self, word: &str) {
        let folded = word.to_lowercase();
        match self.counts.get_mut(&folded) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(folded.clone(), 1);
                self.order.push(folded);
            }
        }
    }

    /// Tally every word token of a single line. Separator runs are skipped;
    /// an empty line contributes nothing.
    pub fn tally_line(&mut self, line: &str, separators: &SeparatorSet) {
        for token in tokenize(line, separators) {
            if token.is_word() {
                self.observe(token.text);
            }
        }
    }

    /// Tally every line of a buffered reader.
    pub fn tally_lines<R: BufRead>(
        &mut self,
        reader: R,
        separators: &SeparatorSet,
    ) -> std::io::Result<()> {
        for line in reader.lines() {
            self.tally_line(&line?, separators);
        }
        Ok(())
    }

    /// Tally an in-memory text body.
    pub fn tally_text(&mut self, text: &str, separators: &SeparatorSet) {
        for line in text.lines() {
            self.tally_line(line, separators);
        }
    }

    /// Fold another tally into this one. Words already present keep their
    /// first-seen position here; new words append in the other tally's order.
    pub fn merge(&mut self, other: WordTally) {
        for word in other.order {
            let added = other.counts.get(&word).copied().unwrap_or(0);
            match self.counts.get_mut(&word) {
                Some(count) => *count += added,
                None => {
                    self.counts.insert(word.clone(), added);
                    self.order.push(word);
                }
            }
        }
    }

    /// Occurrences recorded for `word` (already folded), if any.
    pub fn count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distinct words in the order they were first seen.
    pub fn first_seen(&self) -> &[String] {
        &self.order
    }

    /// Consume the tally into rows sorted by word, ascending lexicographic
    /// (code point) order.
    pub fn into_sorted_rows(self) -> Vec<WordCount> {
        let WordTally { mut order, counts } = self;
        order.sort();
        order
            .into_iter()
            .map(|word| {
                let count = counts.get(&word).copied().unwrap_or(0);
                WordCount { word, count }
            })
            .collect()
    }

    /// Rows sorted by count descending, ties broken alphabetically. Used by
    /// the stats surface for top-N listings.
    pub fn top_rows(&self, n: usize) -> Vec<WordCount> {
        let mut rows: Vec<WordCount> = self
            .order
            .iter()
            .map(|word| WordCount {
                word: word.clone(),
                count: self.counts.get(word).copied().unwrap_or(0),
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        rows.truncate(n);
        rows
    }
}
