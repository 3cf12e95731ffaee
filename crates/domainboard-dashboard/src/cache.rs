//! Client-side copy of the record collection.

use tracing::{debug, instrument};

use domainboard_core::{Record, RecordPatch, RecordStore, Result};

use crate::search::{Page, SearchQuery};

/// The dashboard's in-memory copy of the store.
///
/// Mutations go to the store first; the local copy is reconciled from the
/// store's answer only when the call succeeds. Nothing pushes changes made
/// by other clients, so the copy can drift until the next
/// [`refresh`](Self::refresh).
#[derive(Debug)]
pub struct RecordCache<S> {
    store: S,
    records: Vec<Record>,
    stale: bool,
}

impl<S: RecordStore> RecordCache<S> {
    /// An empty cache that is stale until its first refresh.
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            stale: true,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reload the whole collection from the store.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<()> {
        self.records = self.store.list().await?;
        self.stale = false;
        debug!(count = self.records.len(), "Cache refreshed");
        Ok(())
    }

    /// Refresh only if the cache is marked stale.
    pub async fn ensure_fresh(&mut self) -> Result<()> {
        if self.stale {
            self.refresh().await?;
        }
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn create(&mut self, record: Record) -> Result<Record> {
        let created = self.store.create(record).await?;
        self.records.push(created.clone());
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&mut self, id: &str, patch: RecordPatch) -> Result<Record> {
        let updated = match self.store.update(id, patch).await {
            Ok(updated) => updated,
            Err(err) => return Err(self.note_failure(err)),
        };

        match self.records.iter_mut().find(|r| r.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            // Present on the server but not here; the copy is behind.
            None => {
                self.records.push(updated.clone());
                self.stale = true;
            }
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        if let Err(err) = self.store.delete(id).await {
            return Err(self.note_failure(err));
        }

        if let Some(pos) = self.records.iter().position(|r| r.id == id) {
            self.records.remove(pos);
        }
        Ok(())
    }

    /// Visible rows for `query` on page `page`.
    pub fn view(&self, query: &SearchQuery, page: usize, page_size: usize) -> Page<'_> {
        query.page(&self.records, page, page_size)
    }

    fn note_failure(&mut self, err: domainboard_core::Error) -> domainboard_core::Error {
        if err.is_not_found() {
            debug!(error = %err, "Store disagrees with cache, marking stale");
            self.stale = true;
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domainboard_core::MemoryRecordStore;

    #[tokio::test]
    async fn starts_stale_and_empty() {
        let mut cache = RecordCache::new(MemoryRecordStore::with_records(vec![Record::new(
            "A1", "a.com", "", "",
        )]));
        assert!(cache.is_stale());
        assert!(cache.is_empty());

        cache.ensure_fresh().await.unwrap();
        assert!(!cache.is_stale());
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn invalidate_marks_stale() {
        let mut cache = RecordCache::new(MemoryRecordStore::new());
        cache.refresh().await.unwrap();
        cache.invalidate();
        assert!(cache.is_stale());
    }
}
