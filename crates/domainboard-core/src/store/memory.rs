//! In-process record store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::Result;
use crate::types::{Record, RecordPatch};

use super::{DuplicateIds, RecordStore, apply_create, apply_delete, apply_update};

/// A [`RecordStore`] held entirely in memory.
///
/// Same semantics as the file store, minus persistence. Each operation takes
/// the lock for its whole read-modify-write, so writers never interleave.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<Record>>,
    duplicates: DuplicateIds,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
            duplicates: DuplicateIds::default(),
        }
    }

    pub fn duplicates(mut self, duplicates: DuplicateIds) -> Self {
        self.duplicates = duplicates;
        self
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> Result<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn create(&self, record: Record) -> Result<Record> {
        let mut records = self.records.write().await;
        let stored = apply_create(&mut records, record, self.duplicates)?;
        debug!("Created record");
        Ok(stored)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record> {
        let mut records = self.records.write().await;
        let updated = apply_update(&mut records, id, &patch)?;
        debug!("Updated record");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        apply_delete(&mut records, id)?;
        debug!("Deleted record");
        Ok(())
    }
}
