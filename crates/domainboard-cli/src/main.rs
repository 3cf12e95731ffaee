//! domainboard - run the records API or manage records from the shell.
//!
//! `domainboard serve` runs the REST server over a JSON file.
//! `domainboard records ...` talks to a running server, or edits a JSON file
//! directly when given a `file://` store URL.

mod cli;
mod commands;
mod output;
mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{records, serve};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    if let Err(err) = run(cli.command).await {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Records(cmd) => records::handle(cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // stdout carries command output; logs go to stderr.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
