//! Update record command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use domainboard_core::{RecordPatch, RecordStore};

use crate::output;
use crate::store::{CliStore, StoreArgs};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: String,

    /// New domain
    #[arg(long)]
    pub domain: Option<String>,

    /// New IP
    #[arg(long)]
    pub ip: Option<String>,

    /// New date
    #[arg(long)]
    pub date: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let patch = RecordPatch {
        domain: args.domain,
        ip: args.ip,
        date: args.date,
        ..Default::default()
    };
    if patch.is_empty() {
        bail!("Nothing to update: pass --domain, --ip or --date");
    }

    let store = CliStore::open(&args.store)?;
    let updated = store
        .update(&args.id, patch)
        .await
        .with_context(|| format!("Failed to update {}", args.id))?;

    output::json(&updated)?;
    output::success(&format!("Updated {}", updated.id));

    Ok(())
}
