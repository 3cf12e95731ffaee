//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::records::RecordsCommand;
use crate::commands::serve::ServeArgs;

/// Domain records dashboard: API server and record tools.
#[derive(Parser, Debug)]
#[command(name = "domainboard")]
#[command(author, version = env!("DOMAINBOARD_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the REST API server
    Serve(ServeArgs),

    /// List, add, update and delete records
    Records(RecordsCommand),
}
