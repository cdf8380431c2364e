//! Check recorded actions against the action shape.
//!
//! `canonical check <PATH>` validates a newline-delimited JSON log; `canonical action
//! <JSON>` validates one inline document. Exit codes are listed in
//! [`canonical::exit_codes`].

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use canonical::check::{CheckOutcome, check_action_log, check_action_str};
use canonical::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "canonical",
    version,
    about = "Validate actions against the canonical action shape"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every action in a newline-delimited JSON log.
    Check {
        /// Path to the action log.
        path: PathBuf,
    },
    /// Validate a single inline JSON action document.
    Action {
        /// Action document, e.g. '{"name":"ADD_TODO"}'.
        json: String,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Ok(usage(&err)),
    };
    let outcome = match cli.command {
        Command::Check { path } => check_action_log(&path)?,
        Command::Action { json } => check_action_str(&json)?,
    };
    Ok(report(&outcome))
}

/// Print a clap error or help text. Usage errors must not share the rejection code.
fn usage(err: &clap::Error) -> i32 {
    let _ = err.print();
    if err.use_stderr() {
        exit_codes::INVALID
    } else {
        exit_codes::OK
    }
}

/// Print the outcome and map it to an exit code.
fn report(outcome: &CheckOutcome) -> i32 {
    match outcome {
        CheckOutcome::Valid { actions } => {
            println!("ok: actions={}", actions);
            exit_codes::OK
        }
        CheckOutcome::Rejected { line, error } => {
            println!("rejected: line={} kind={} {}", line, error.kind(), error);
            exit_codes::REJECTED
        }
    }
}
