//! mk - the project assistant
//!
//! Compiles the front-end assets of the template and turns a fresh copy of
//! it into a project of its own.
//!
//! # Commands
//! - `init`, `init fork`: rename the project and reset or fork its history
//! - `dev`, `build`: compile CSS and TS/JS for development or production
//! - `merge upstream`: sync a fork with the template

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mk_lib::cli::{print_help, Cli};
use mk_lib::error::{exit_code_for, EXIT_USAGE};
use mk_lib::MkError;

/// Initialize the logging/tracing system
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mk=debug,mk_lib=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mk=info,mk_lib=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<MkError>() {
        Some(MkError::Command { command, status, stderr }) => {
            eprintln!("{} {} ({})", "✗".red(), command.red(), status);
            if !stderr.is_empty() {
                eprintln!("{}", stderr.yellow());
            }
        }
        _ => eprintln!("{} {:#}", "✗".red(), err),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `mk <command> --help` still gets the full catalog
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print_help();
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or("invalid arguments");
            eprintln!("{} {}", "✗".red(), first_line.red());
            return ExitCode::from(EXIT_USAGE as u8);
        }
    };

    init_tracing(cli.verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(exit_code_for(&e) as u8)
        }
    }
}
