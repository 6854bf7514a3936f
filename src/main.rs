//! CLI entry point for the lock solver.
//!
//! Usage:
//!   lock-solver solve <request.json> [options]
//!   lock-solver solve --stdin [options]
//!
//! Options:
//!   --timeout <seconds>   Maximum search time (default: 15)
//!   --max-states <n>      Maximum states explored (default: 1000000)
//!
//! The request is a JSON object with `from` and `to` digit arrays. The
//! response is printed to stdout: on success the solution steps with the
//! turn list and search statistics, on failure an `error` object.

mod combination;
mod error;
mod graph;
mod solver;
mod validate;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use combination::Move;
use solver::{solve_request, SolveRequest, Solution, SolverConfig};

#[derive(Parser)]
#[command(name = "lock-solver")]
#[command(about = "Shortest turn-sequence solver for rotary combination locks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the minimum turn sequence between two combinations
    Solve {
        /// Path to request JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read request from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Maximum search time in seconds
        #[arg(long, default_value = "15")]
        timeout: u64,

        /// Maximum number of states to explore
        #[arg(long, default_value = "1000000")]
        max_states: usize,
    },
}

/// Output format for a solved request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solution: Vec<Vec<u8>>,
    moves: Vec<Move>,
    states_explored: usize,
    time_elapsed_ms: u64,
}

/// Output format for a failed request
#[derive(Debug, Serialize, Deserialize)]
struct ErrorOutput {
    error: String,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            timeout,
            max_states,
        } => {
            // Read request JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error reading from stdin: {e}");
                    process::exit(2);
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("Error reading file {path:?}: {e}");
                        process::exit(2);
                    }
                }
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                process::exit(2);
            };

            // Parse request
            let request: SolveRequest = match serde_json::from_str(&json_content) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error parsing request JSON: {e}");
                    process::exit(2);
                }
            };

            let config = SolverConfig {
                timeout: Duration::from_secs(timeout),
                max_states,
            };

            // Run solver and print JSON output
            match solve_request(&request, &config) {
                Ok(solution) => {
                    let output = format_solution(&solution);
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                }
                Err(err) => {
                    let output = ErrorOutput {
                        error: err.to_string(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    process::exit(1);
                }
            }
        }
    }
}

fn format_solution(solution: &Solution) -> SolveOutput {
    SolveOutput {
        solution: solution
            .steps
            .iter()
            .map(|c| c.digits().to_vec())
            .collect(),
        moves: solution.moves.clone(),
        states_explored: solution.states_explored,
        time_elapsed_ms: solution.time_elapsed_ms,
    }
}

/// Dev diagnostics on stderr, controlled by `RUST_LOG`. Defaults to `warn`
/// so the JSON on stdout stays the only product output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
