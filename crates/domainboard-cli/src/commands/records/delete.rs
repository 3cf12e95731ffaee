//! Delete record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use domainboard_core::RecordStore;

use crate::output;
use crate::store::{CliStore, StoreArgs};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let store = CliStore::open(&args.store)?;
    store
        .delete(&args.id)
        .await
        .with_context(|| format!("Failed to delete {}", args.id))?;

    output::success(&format!("Deleted {}", args.id));
    Ok(())
}
