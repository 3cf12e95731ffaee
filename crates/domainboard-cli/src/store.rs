//! Store selection for record commands.

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;

use domainboard_core::{
    DuplicateIds, ReadFailurePolicy, Record, RecordPatch, RecordStore, StoreUrl,
};
use domainboard_file::{FileRecordStore, FileStoreOptions};
use domainboard_http::HttpRecordStore;

/// Where record commands read and write.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Server URL, or file:// URL of a JSON data file
    #[arg(long, env = "DOMAINBOARD_STORE", default_value = "http://localhost:5000")]
    pub store: StoreUrl,

    /// How an unreadable data file is treated (file:// stores only)
    #[arg(long, env = "DOMAINBOARD_READ_FAILURES", default_value = "mask")]
    pub read_failures: ReadFailurePolicy,

    /// Whether creating a duplicate id is allowed (file:// stores only)
    #[arg(long, env = "DOMAINBOARD_DUPLICATE_IDS", default_value = "allow")]
    pub duplicate_ids: DuplicateIds,
}

/// A record store opened from a [`StoreUrl`].
#[derive(Debug)]
pub enum CliStore {
    File(FileRecordStore),
    Http(HttpRecordStore),
}

impl CliStore {
    pub fn open(args: &StoreArgs) -> Result<Self> {
        if args.store.is_local() {
            let path = args
                .store
                .to_file_path()
                .with_context(|| format!("Not a usable file path: {}", args.store))?;
            let options = FileStoreOptions {
                read_failures: args.read_failures,
                duplicates: args.duplicate_ids,
            };
            Ok(CliStore::File(FileRecordStore::with_options(path, options)))
        } else {
            let store =
                HttpRecordStore::new(args.store.clone()).context("Failed to build HTTP client")?;
            Ok(CliStore::Http(store))
        }
    }
}

#[async_trait]
impl RecordStore for CliStore {
    async fn list(&self) -> domainboard_core::Result<Vec<Record>> {
        match self {
            CliStore::File(store) => store.list().await,
            CliStore::Http(store) => store.list().await,
        }
    }

    async fn create(&self, record: Record) -> domainboard_core::Result<Record> {
        match self {
            CliStore::File(store) => store.create(record).await,
            CliStore::Http(store) => store.create(record).await,
        }
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> domainboard_core::Result<Record> {
        match self {
            CliStore::File(store) => store.update(id, patch).await,
            CliStore::Http(store) => store.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &str) -> domainboard_core::Result<()> {
        match self {
            CliStore::File(store) => store.delete(id).await,
            CliStore::Http(store) => store.delete(id).await,
        }
    }
}
