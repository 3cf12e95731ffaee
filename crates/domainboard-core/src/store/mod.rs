//! The record store contract.
//!
//! Every backend (in-memory, JSON file, remote API) implements
//! [`RecordStore`], so swapping persistence is a local change.

mod memory;
mod policy;

use async_trait::async_trait;

use crate::Result;
use crate::types::{Record, RecordPatch};

pub use memory::MemoryRecordStore;
pub use policy::{DuplicateIds, ReadFailurePolicy};

/// List/create/update/delete over one collection of records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return the full current collection.
    async fn list(&self) -> Result<Vec<Record>>;

    /// Append `record` as-is and return the stored record.
    async fn create(&self, record: Record) -> Result<Record>;

    /// Shallow-merge `patch` over the record with `id` and return the result.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) if no record has
    /// that id. The stored id stays `id` even if the patch names another.
    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record>;

    /// Remove the first record with `id`.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) if nothing matched.
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    async fn list(&self) -> Result<Vec<Record>> {
        (**self).list().await
    }

    async fn create(&self, record: Record) -> Result<Record> {
        (**self).create(record).await
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id).await
    }
}

/// Apply a create to an in-memory collection.
///
/// Shared by the backends so they agree on duplicate handling.
pub fn apply_create(
    records: &mut Vec<Record>,
    record: Record,
    duplicates: DuplicateIds,
) -> Result<Record> {
    if duplicates == DuplicateIds::Reject && records.iter().any(|r| r.id == record.id) {
        return Err(crate::Error::conflict(record.id));
    }
    records.push(record.clone());
    Ok(record)
}

/// Apply an update to an in-memory collection.
pub fn apply_update(records: &mut [Record], id: &str, patch: &RecordPatch) -> Result<Record> {
    let slot = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| crate::Error::not_found(id))?;
    *slot = slot.merged(id, patch);
    Ok(slot.clone())
}

/// Apply a delete to an in-memory collection.
pub fn apply_delete(records: &mut Vec<Record>, id: &str) -> Result<()> {
    let before = records.len();
    if let Some(pos) = records.iter().position(|r| r.id == id) {
        records.remove(pos);
    }
    if records.len() == before {
        return Err(crate::Error::not_found(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("A1", "a.com", "", "2024-01-01"),
            Record::new("B2", "b.com", "10.0.0.2", "2024-01-02"),
        ]
    }

    #[test]
    fn create_allows_duplicates_by_default() {
        let mut records = sample();
        let dup = Record::new("A1", "dup.com", "", "");
        apply_create(&mut records, dup, DuplicateIds::default()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn create_rejects_duplicates_when_asked() {
        let mut records = sample();
        let dup = Record::new("A1", "dup.com", "", "");
        let err = apply_create(&mut records, dup, DuplicateIds::Reject).unwrap_err();
        assert!(matches!(err, crate::Error::Conflict { ref id } if id == "A1"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut records = sample();
        let patch = RecordPatch::default().ip("10.0.0.9");
        let updated = apply_update(&mut records, "B2", &patch).unwrap();
        assert_eq!(updated, Record::new("B2", "b.com", "10.0.0.9", "2024-01-02"));
        assert_eq!(records[1], updated);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut records = sample();
        let err = apply_update(&mut records, "ghost", &RecordPatch::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_removes_only_first_match() {
        let mut records = sample();
        records.push(Record::new("A1", "again.com", "", ""));
        apply_delete(&mut records, "A1").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].domain, "again.com");
    }

    #[test]
    fn delete_missing_leaves_collection() {
        let mut records: Vec<Record> = Vec::new();
        assert!(apply_delete(&mut records, "ghost").unwrap_err().is_not_found());
        assert!(records.is_empty());
    }
}
