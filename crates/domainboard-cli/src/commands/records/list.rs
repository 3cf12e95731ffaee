//! List records command implementation.

use anyhow::{Context, Result};
use clap::Args;

use domainboard_dashboard::{DEFAULT_PAGE_SIZE, RecordCache, SearchQuery};

use crate::output;
use crate::store::{CliStore, StoreArgs};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Only show records matching every word of this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Show every matching record on one page
    #[arg(long, conflicts_with_all = ["page", "page_size"])]
    pub all: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let mut cache = RecordCache::new(CliStore::open(&args.store)?);
    cache.refresh().await.context("Failed to list records")?;

    let query = SearchQuery::new(args.search.as_deref().unwrap_or_default());
    let (page, page_size) = if args.all {
        (0, cache.len().max(1))
    } else {
        (args.page.saturating_sub(1), args.page_size)
    };
    let view = cache.view(&query, page, page_size);

    if view.rows.is_empty() {
        output::note("No records found.");
        return Ok(());
    }

    for record in &view.rows {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    output::note(&format!(
        "Page {}/{} ({} matching)",
        view.page + 1,
        view.page_count(),
        view.total
    ));

    Ok(())
}
