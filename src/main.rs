//! Graft - copy-paste component registry client
//!
//! Resolves components and their registry dependencies, writes them into a
//! project as plain source files, and detects and re-syncs local drift.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod content;
mod error;
mod installer;
mod operations;
mod path_utils;
mod registry;
mod resolver;
mod ui;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Environment variable holding the log filter (e.g. `graft=debug`)
const LOG_ENV: &str = "GRAFT_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "graft=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Init(args) => commands::init::run(cli.cwd, args),
        Commands::Add(args) => commands::add::run(cli.cwd, cli.registry_dir, args),
        Commands::Update(args) => commands::update::run(cli.cwd, cli.registry_dir, args),
        Commands::Diff(args) => commands::diff::run(cli.cwd, cli.registry_dir, args),
        Commands::List(args) => commands::list::run(cli.cwd, cli.registry_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
