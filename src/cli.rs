//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::separators::{SeparatorSet, DEFAULT_SEPARATORS};

/// wordtally - tally word occurrences in text files and render sorted reports.
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtally splits each input line into maximal runs of separator and
non-separator characters, tallies the distinct words case-insensitively, and
renders the words with their counts in alphabetical order.

Output formats:
- html (default): a report document with a bordered Word/Count table
- md: a Markdown table
- json: a single JSON report document
- jsonl: one JSON object per word row

Examples:
    wordtally count book.txt
    wordtally count book.txt --output report.html
    wordtally count notes/ --format json --pretty
    wordtally count data.csv --separators ";, "
    wordtally tokens draft.txt
    wordtally stats notes/ --top 20
"#
)]
pub struct Cli {
    /// Separator characters that delimit words.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_SEPARATORS,
        value_name = "CHARS",
        env = "WORDTALLY_SEPARATORS",
        long_help = "The characters that delimit words. Every character of the string is a\n\
separator; duplicates are ignored. A word is any maximal run of characters\n\
not in this set, compared case-insensitively.\n\n\
Default: space, tab, and the characters , . - ! _"
    )]
    pub separators: String,

    /// Output format (html/md/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "html",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- html (default)\n\
- md (markdown)\n\
- json\n\
- jsonl"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on html/md formats."
    )]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored stderr diagnostics. This is useful when piping to files or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (suppress warnings).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress non-essential stderr output such as per-file skip warnings.\n\
The rendered report is still printed to stdout (or written to --output)."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print a tally summary to stderr after the run. Intended for debugging and\n\
may increase stderr output."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tally word occurrences and render the report.
    #[command(
        long_about = "Tally the word occurrences of INPUT and render a report with one row per\n\
distinct word, sorted alphabetically.\n\n\
INPUT may be a single text file or a directory; a directory is walked\n\
recursively (gitignore rules respected, hidden files skipped by default) and\n\
all text files are merged into one tally. Binary and unreadable files are\n\
skipped with a warning.\n\n\
Examples:\n\
  wordtally count book.txt\n\
  wordtally count book.txt --output report.html\n\
  wordtally count notes/ --hidden --no-ignore --format md\n"
    )]
    Count {
        /// Input file or directory.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the report to a file instead of stdout.
        #[arg(
            short,
            long,
            value_name = "FILE",
            long_help = "Write the rendered report to FILE instead of stdout.\n\n\
The file is created or overwritten."
        )]
        output: Option<PathBuf>,

        /// Include hidden files/directories (dotfiles).
        #[arg(
            long,
            long_help = "Include hidden files and directories (dotfiles) when INPUT is a directory.\n\n\
By default, hidden entries are skipped."
        )]
        hidden: bool,

        /// Disable .gitignore and other ignore rules.
        #[arg(
            long,
            long_help = "Disable respect for ignore files (.gitignore, .ignore, global ignores)\n\
when INPUT is a directory."
        )]
        no_ignore: bool,
    },

    /// Inspect the raw token stream of a file.
    #[command(
        long_about = "Tokenize FILE and emit every token - word runs and separator runs alike -\n\
with its line number and class. Use this to debug a separator configuration.\n\n\
Output is one JSON object per token (or a single JSON array with --json).\n\n\
Examples:\n\
  wordtally tokens draft.txt\n\
  wordtally tokens data.csv --separators \";, \" --json --pretty\n"
    )]
    Tokens {
        /// File to tokenize.
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Emit a single JSON array instead of one object per line.
        #[arg(long)]
        json: bool,
    },

    /// Show word statistics for a file or directory.
    #[command(
        long_about = "Compute line, character, word, and distinct-word totals for INPUT, plus\n\
the most frequent words.\n\n\
Examples:\n\
  wordtally stats book.txt\n\
  wordtally stats notes/ --top 20 --stats-format table\n"
    )]
    Stats {
        /// Input file or directory.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format for stats (summary/json/table).
        #[arg(
            long = "stats-format",
            value_name = "FORMAT",
            default_value = "summary",
            long_help = "Select the output format for statistics.\n\n\
Supported values:\n\
- summary (default): human-readable summary\n\
- json: JSON object with full statistics\n\
- table: Markdown table format"
        )]
        stats_format: String,

        /// Number of top words to list.
        #[arg(long, default_value = "10", value_name = "N")]
        top: usize,

        /// Include hidden files/directories (dotfiles).
        #[arg(long)]
        hidden: bool,

        /// Disable .gitignore and other ignore rules.
        #[arg(long)]
        no_ignore: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let separators = SeparatorSet::new(&cli.separators);

    match cli.command {
        Commands::Count {
            input,
            output,
            hidden,
            no_ignore,
        } => crate::count::run_count(
            &input,
            output.as_deref(),
            &separators,
            hidden,
            !no_ignore,
            cli.quiet,
            cli.verbose,
            render_config,
        ),

        Commands::Tokens { input, json } => {
            crate::tokens::run_tokens(&input, &separators, json, cli.pretty)
        }

        Commands::Stats {
            input,
            stats_format,
            top,
            hidden,
            no_ignore,
        } => {
            let stats_fmt: crate::stats::StatsFormat = stats_format.parse().unwrap_or_default();
            crate::stats::run_stats(
                &input,
                &separators,
                hidden,
                !no_ignore,
                stats_fmt,
                top,
                cli.pretty,
            )
        }
    }
}
