//! Show record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use domainboard_core::Error;
use domainboard_dashboard::RecordCache;

use crate::output;
use crate::store::{CliStore, StoreArgs};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Record id
    pub id: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let mut cache = RecordCache::new(CliStore::open(&args.store)?);
    cache.refresh().await.context("Failed to load records")?;

    let record = cache
        .find(&args.id)
        .ok_or_else(|| Error::not_found(&args.id))?;

    if args.json {
        output::json_pretty(record)?;
    } else {
        output::field("ID", &record.id);
        output::field("Domain", &record.domain);
        output::field("IP", &record.ip);
        output::field("Date", &record.date);
    }

    Ok(())
}
