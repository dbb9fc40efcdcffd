//! Tokens command - inspect the raw token stream of a file
//!
//! Emits every token (word and separator runs alike) with its line number,
//! which makes the separator/word boundaries of a given configuration
//! directly visible. Intended for debugging separator sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::reader::read_text;
use crate::core::separators::SeparatorSet;
use crate::core::tokenizer::{tokenize, TokenKind};

/// Owned, serializable token record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// 1-indexed line number
    pub line: usize,
    pub kind: TokenKind,
    pub text: String,
}

/// Tokenize a whole text body into owned records.
pub fn token_records(content: &str, separators: &SeparatorSet) -> Vec<TokenRecord> {
    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for token in tokenize(line, separators) {
            records.push(TokenRecord {
                line: idx + 1,
                kind: token.kind,
                text: token.text.to_string(),
            });
        }
    }
    records
}

/// Run the tokens command.
pub fn run_tokens(
    input: &Path,
    separators: &SeparatorSet,
    as_json: bool,
    pretty: bool,
) -> Result<()> {
    let text = read_text(input).with_context(|| format!("Failed to read input: {:?}", input))?;
    let records = token_records(&text.content, separators);

    if as_json {
        let json = if pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        println!("{}", json);
    } else {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    Ok(())
}
