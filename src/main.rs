use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;
use error::LocateError;
use services::output::{print_error, print_not_found};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::handle_query(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(cli.json, &e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "airules=debug" } else { "airules=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn report_error(json: bool, err: &anyhow::Error) {
    match err.downcast_ref::<LocateError>() {
        Some(e @ LocateError::NotFound(_)) => {
            print_not_found(json, e.code(), &e.to_string(), e.hint())
        }
        Some(e) => print_error(json, e.code(), &e.to_string(), e.hint()),
        None => print_error(json, "INTERNAL", &format!("{:#}", err), None),
    }
}
