//! Spellbee - CLI
//!
//! Exercises the daily puzzle engine: show the active puzzle, check candidate
//! words, inspect the rollover countdown, and audit generation quality.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use spellbee::{
    commands::{check_word, puzzle_view, run_audit},
    dictionary::{CorpusSource, Dictionary},
    output::{print_audit_report, print_check_result, print_countdown, print_puzzle_view},
    puzzle::{Generator, PuzzleScheduler},
    session::MemoryStore,
    validation::ValidationService,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "spellbee",
    about = "Daily spelling-bee puzzle engine: deterministic generation, scoring, validation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the network corpus upgrade and use the embedded word list
    #[arg(long, global = true)]
    offline: bool,

    /// Corpus fetch timeout in seconds
    #[arg(long, global = true, default_value = "5")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active puzzle (default)
    Today {
        /// Reveal the full valid-word list
        #[arg(short, long)]
        words: bool,
    },

    /// Show the puzzle for a specific date
    Date {
        /// Puzzle date (YYYY-MM-DD)
        date: String,

        /// Reveal the full valid-word list
        #[arg(short, long)]
        words: bool,
    },

    /// Validate a candidate word against the active puzzle
    Check {
        /// Candidate word
        word: String,
    },

    /// Show time remaining until the next puzzle
    Countdown,

    /// Audit generation quality over a range of dates
    Audit {
        /// Number of consecutive dates to audit
        #[arg(short = 'n', long, default_value = "7")]
        days: u32,

        /// First date to audit (YYYY-MM-DD, default: the active date)
        #[arg(short, long)]
        start: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let source = CorpusSource {
        timeout: Duration::from_secs(cli.timeout),
        offline: cli.offline,
        ..CorpusSource::default()
    };
    let dictionary = Arc::new(Dictionary::with_source(source));
    dictionary.load().await;

    let scheduler = PuzzleScheduler::new();
    let store = MemoryStore::new();

    let command = cli.command.unwrap_or(Commands::Today { words: false });

    match command {
        Commands::Today { words } => {
            let view = puzzle_view(&scheduler, &dictionary, &store, None);
            print_puzzle_view(&view, words);
        }
        Commands::Date { date, words } => {
            let date = parse_date(&date)?;
            let view = puzzle_view(&scheduler, &dictionary, &store, Some(date));
            print_puzzle_view(&view, words);
        }
        Commands::Check { word } => {
            let service = Arc::new(ValidationService::new(Arc::clone(&dictionary)));
            let puzzle = scheduler.todays_puzzle(&dictionary);
            let result = check_word(&service, &puzzle, &word).await;
            print_check_result(&result);
        }
        Commands::Countdown => {
            print_countdown(scheduler.time_until_next_rollover());
        }
        Commands::Audit { days, start } => {
            let start = match start {
                Some(date) => parse_date(&date)?,
                None => scheduler.active_date(),
            };
            let report = run_audit(&dictionary, &Generator::new(), start, days, true);
            print_audit_report(&report);
        }
    }

    Ok(())
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{input}', expected YYYY-MM-DD"))
}
