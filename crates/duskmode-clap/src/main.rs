//! `duskmode` - read, toggle, or set the persisted display preference.

mod bootstrap;
mod cli;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::bootstrap::{Outcome, EXIT_ERROR};
use crate::cli::Cli;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn execute(cli: &Cli) -> Result<u8> {
    let outcome = bootstrap::run(cli)?;
    match &outcome {
        Outcome::Report(report) => println!("{}", report.render(cli.output)?),
        Outcome::Classes(classes) => println!("{}", classes),
        Outcome::Status(_) => {}
    }
    Ok(outcome.exit_status())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
