//! `hkgen`: command-line generator for Holme-Kim networks.
//!
//! ```text
//! hkgen <NET_SIZE> <RANDSEED> <M> <PT> <SEED_SIZE> <SEED_TYPE> [K_AVE]
//! ```
//!
//! Parses the arguments with clap, generates the network, and writes it as an edge list to
//! stdout or `--output`. Logging is initialised eagerly so the parameter and toss reports of the
//! generator reach `stderr`.

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::{
    cli::{Cli, run},
    logging::LoggingError,
};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!(error = %format!("{err:#}"), "hkgen failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
