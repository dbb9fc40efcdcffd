//! Line tokenizer - splits a line into maximal separator / word runs
//!
//! A token is a maximal contiguous run of characters that are either all
//! separators or all non-separators. Tokens carry their class explicitly so
//! callers never have to re-classify a run by inspecting its first character.
//!
//! Concatenating the tokens of a line, in order, reconstructs the line
//! exactly; the tokenizer is a pure forward scan with no backtracking.

use serde::{Deserialize, Serialize};

use crate::core::separators::SeparatorSet;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal homogeneous run within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the maximal run starting at byte offset `position`, or `None` when
/// `position` is at or past the end of the line.
///
/// `position` must lie on a char boundary. The returned token is non-empty,
/// starts at `position`, and extending it by one character would either cross
/// the separator/word boundary or run past the end of the line.
pub fn next_token<'a>(
    line: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Option<Token<'a>> {
    let rest = line.get(position..)?;
    let first = rest.chars().next()?;
    let in_separators = separators.contains(first);

    let end = rest
        .char_indices()
        .find(|(_, c)| separators.contains(*c) != in_separators)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(Token {
        kind: if in_separators {
            TokenKind::Separator
        } else {
            TokenKind::Word
        },
        text: &rest[..end],
    })
}

/// Iterator over the tokens of a single line.
pub struct Tokens<'a> {
    line: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str, separators: &'a SeparatorSet) -> Self {
        Self {
            line,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = next_token(self.line, self.position, self.separators)?;
        self.position += token.text.len();
        Some(token)
    }
}

/// Tokenize a whole line.
pub fn tokenize<'a>(line: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens::new(line, separators)
}
