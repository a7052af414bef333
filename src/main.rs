//! fnship - package, upload and deploy HTTP cloud functions
//!
//! Turns a local service directory into a zip archive (without its
//! local-only files), uploads it to cloud storage and deploys it as an
//! HTTP-triggered function using the gsutil and gcloud command line tools.

use clap::Parser;
use miette::Diagnostic;

mod archive;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logging;
mod operations;
mod scaffold;
mod service;
mod tools;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use error::FnshipError;

fn report(err: &FnshipError) {
    eprintln!("Error: {}", err);
    if let Some(help) = err.help() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => commands::deploy::run(cli.config, cli.deploy),
        Some(Commands::Deploy(args)) => commands::deploy::run(cli.config, args),
        Some(Commands::Init(args)) => commands::init::run(args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(e.exit_code());
    }
}
