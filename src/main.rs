//! Command-line entry point for the project generator.

use std::process::ExitCode;

use clap::Parser;

use cppgen::{cli, commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse_from(cli::normalize_args(std::env::args()));
    let run_log = logging::init_subscriber(args.verbose);

    match commands::generate::run(&args, run_log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
