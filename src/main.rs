//! Canopy CLI - play the sun contest over stdin/stdout, or inspect captured games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Canopy - a greedy bot for the tree-growing sun contest
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter for diagnostics on stderr (e.g. `warn`, `debug`, `canopy=trace`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Command to run (default: play)
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one game against the referee on stdin/stdout
    Play {
        #[command(flatten)]
        costs: cli::CostArgs,
    },

    /// Replay a captured referee input file and print each turn's decision
    Decide {
        /// File holding exactly what the referee sent on stdin
        #[arg(required = true)]
        transcript: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        #[command(flatten)]
        costs: cli::CostArgs,
    },

    /// Check a captured referee input file for protocol and consistency errors
    Validate {
        /// File holding exactly what the referee sent on stdin
        #[arg(required = true)]
        transcript: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = cli::init_logging(&args.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        None => cli::play::execute(cli::CostArgs::default()),

        Some(Commands::Play { costs }) => cli::play::execute(costs),

        Some(Commands::Decide {
            transcript,
            format,
            costs,
        }) => cli::decide::execute(&transcript, format, costs),

        Some(Commands::Validate { transcript }) => cli::validate::execute(&transcript),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
