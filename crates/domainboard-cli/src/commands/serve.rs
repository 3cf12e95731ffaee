//! Serve command implementation.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use domainboard_core::{DuplicateIds, ReadFailurePolicy};
use domainboard_server::{DEFAULT_DATA_FILE, ServerConfig};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "DOMAINBOARD_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// JSON file holding the records
    #[arg(long, env = "DOMAINBOARD_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// How an unreadable data file is treated: mask (list as empty) or surface (500)
    #[arg(long, env = "DOMAINBOARD_READ_FAILURES", default_value = "mask")]
    pub read_failures: ReadFailurePolicy,

    /// Whether creating a duplicate id is allowed: allow or reject (409)
    #[arg(long, env = "DOMAINBOARD_DUPLICATE_IDS", default_value = "allow")]
    pub duplicate_ids: DuplicateIds,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            bind: args.bind,
            data_file: args.data_file,
            read_failures: args.read_failures,
            duplicates: args.duplicate_ids,
        }
    }
}

pub async fn run(args: ServeArgs) -> Result<()> {
    domainboard_server::serve(args.into())
        .await
        .context("Server failed")
}
