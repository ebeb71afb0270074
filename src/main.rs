//! Lostfound - duplicate detection and reporting for campus lost & found
//!
//! Reads a snapshot of the lost and found tables and groups probable
//! duplicates, explains pair similarity, predicts categories and builds an
//! executive summary.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use lostfound_core::error::{ExitCode as LostFoundExitCode, LostFoundError};
use lostfound_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err, wants_json_errors(env::args().skip(1))),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), command = ?cli.command, "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(LostFoundExitCode::Success),
        Err(e) => {
            report_failure(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: LostFoundExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Argument errors keep clap's own rendering unless JSON was requested, in
/// which case they become the usage envelope on stderr (exit 2). Help and
/// version output always go through clap.
fn parse_failure(err: clap::Error, json: bool) -> ExitCode {
    if !json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }
    let error = LostFoundError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

fn report_failure(cli: &Cli, error: &LostFoundError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

/// Whether raw arguments ask for `--format json`.
///
/// Looked up on argv because a failed parse leaves no `Cli` to consult.
fn wants_json_errors<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    args.iter().enumerate().any(|(i, arg)| match arg.strip_prefix("--format") {
        Some("") => args
            .get(i + 1)
            .is_some_and(|value| value.eq_ignore_ascii_case("json")),
        Some(rest) => rest
            .strip_prefix('=')
            .is_some_and(|value| value.eq_ignore_ascii_case("json")),
        None => false,
    })
}
