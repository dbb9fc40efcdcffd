//! wordtally - a CLI tool for tallying word occurrences in text files
//!
//! wordtally provides:
//! - Separator-driven word tokenization with a configurable separator set
//! - Case-insensitive occurrence counting in alphabetical order
//! - Report rendering (html/md/json/jsonl)
//! - Word statistics and token stream inspection

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod count;
mod scan;
mod stats;
mod tokens;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
