//! Add record command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use domainboard_core::RecordStore;
use domainboard_dashboard::DomainInput;

use crate::output;
use crate::store::{CliStore, StoreArgs};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Domain, optionally with a scheme and ":ip" (e.g. https://example.com:10.0.0.1)
    pub input: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let input = DomainInput::parse(&args.input).context("Invalid domain")?;
    let record = input.into_record(Utc::now());

    let store = CliStore::open(&args.store)?;
    let created = store
        .create(record)
        .await
        .context("Failed to create record")?;

    println!("{}", created.id);
    output::success(&format!("Added {} ({})", created.domain, created.id));

    Ok(())
}
