//! # Baccarat CLI Library
//!
//! This library provides the command-line interface for the baccarat engine.
//! It exposes subcommands for playing an interactive session, dealing rounds
//! for inspection, and reporting the shoe's draw counts.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["baccarat", "play", "--seed", "7"];
//! let code = baccarat_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive session with betting, read line by line from stdin
//! - `deal`: Deal rounds and print cards and winner (text or JSON lines)
//! - `counts`: Deal rounds and print the per-rank draw counts
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BaccaratCli, Commands};
use commands::{
    handle_cfg_command, handle_counts_command, handle_deal_command, handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "counts", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. The `play` session reads from the process's stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["baccarat", "deal", "--seed", "42"];
/// let code = baccarat_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], reading session input from `stdin` instead of the process's stdin.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("start\nBANKER-50\nexit\n");
/// let code = baccarat_cli::run_with_input(
///     ["baccarat", "play", "--seed", "3"],
///     &mut out,
///     &mut err,
///     &mut input,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Bet placed: BANKER 50.00"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BaccaratCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            balance,
            deal_only,
        } => resolve_config(seed, balance, deal_only)
            .and_then(|config| handle_play_command(&config, out, err, stdin)),
        Commands::Deal { seed, rounds, json } => resolve_config(seed, None, false)
            .and_then(|config| handle_deal_command(config.seed, rounds, json, out)),
        Commands::Counts { seed, rounds } => resolve_config(seed, None, false)
            .and_then(|config| handle_counts_command(config.seed, rounds, out)),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            // Nothing more can be reported if stderr itself is gone.
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Loads file and environment configuration and applies command-line flags on top.
fn resolve_config(
    seed: Option<u64>,
    balance: Option<f64>,
    deal_only: bool,
) -> Result<config::Config, CliError> {
    config::load_with_sources()
        .and_then(|resolved| resolved.with_overrides(seed, balance, deal_only))
        .map(|resolved| resolved.config)
        .map_err(|e| CliError::Config(e.to_string()))
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Baccarat CLI");
    let _ = writeln!(err, "Usage: baccarat <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: baccarat --help");
    exit_code::ERROR
}
