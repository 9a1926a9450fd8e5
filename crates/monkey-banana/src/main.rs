//! CLI entry point for the Monkey and Banana solver.
//!
//! Usage:
//!   monkey-banana                          Run the search from the fixed start and print the demo
//!   monkey-banana solve [FILE] [options]   Solve from an initial state given as JSON
//!
//! Options:
//!   --stdin   Read the initial state from stdin instead of FILE
//!   --json    Print the result as JSON instead of a transcript
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monkey_banana::report::render_search_outcome;
use monkey_banana::{render_demo, solve, Action, ProblemConfig, SearchStats, State};

#[derive(Parser)]
#[command(name = "monkey-banana")]
#[command(about = "Depth-first state-space search for the Monkey and Banana puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve from a custom initial state
    Solve {
        /// Path to initial-state JSON file (defaults to the fixed start)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the initial state from stdin instead of a file
        #[arg(long, conflicts_with = "file")]
        stdin: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON output for the `solve` subcommand
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(flatten)]
    stats: SearchStats,
    path: Option<Vec<State>>,
    actions: Option<Vec<Action>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a plan was found.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        None => {
            let result = solve(State::initial());
            print!("{}", render_demo(result.path.as_deref()));
            Ok(true)
        }
        Some(Commands::Solve { file, stdin, json }) => {
            let initial = load_initial_state(file, stdin)?;
            info!(?initial, "solving");

            let result = solve(initial);
            if json {
                let output = SolveOutput {
                    solved: result.solved(),
                    stats: result.stats,
                    actions: result.actions(),
                    path: result.path.clone(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output).context("failed to encode result")?
                );
            } else {
                print!("{}", render_search_outcome(result.path.as_deref()));
            }
            Ok(result.solved())
        }
    }
}

fn load_initial_state(file: Option<PathBuf>, stdin: bool) -> Result<State> {
    let json = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read initial state from stdin")?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read initial state from {}", path.display()))?
    } else {
        return Ok(State::initial());
    };

    let state = ProblemConfig::from_json(&json)?.to_state()?;
    Ok(state)
}
