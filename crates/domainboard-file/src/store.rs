//! Whole-file JSON storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use domainboard_core::error::StorageError;
use domainboard_core::store::{apply_create, apply_delete, apply_update};
use domainboard_core::{
    DuplicateIds, ReadFailurePolicy, Record, RecordPatch, RecordStore, Result,
};

/// Behaviour switches for [`FileRecordStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStoreOptions {
    /// How a corrupt or unreadable file is treated.
    pub read_failures: ReadFailurePolicy,
    /// Whether duplicate ids are accepted on create.
    pub duplicates: DuplicateIds,
}

/// A record store persisted as one pretty-printed JSON array.
///
/// Every operation reads the whole file, mutates the collection and writes
/// the whole file back. There is no lock: concurrent writers each replace
/// the file with their own view and the last rename wins.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
    options: FileStoreOptions,
}

impl FileRecordStore {
    /// Create a store backed by the file at `path`. The file need not exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, FileStoreOptions::default())
    }

    pub fn with_options(path: impl AsRef<Path>, options: FileStoreOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> FileStoreOptions {
        self.options
    }

    /// Read the collection, applying the read failure policy.
    async fn read_records(&self) -> Result<Vec<Record>> {
        match self.load().await {
            Ok(records) => Ok(records),
            Err(err) => match self.options.read_failures {
                ReadFailurePolicy::MaskAsEmpty => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "Unreadable store, treating as empty"
                    );
                    Ok(Vec::new())
                }
                ReadFailurePolicy::Surface => Err(err.into()),
            },
        }
    }

    async fn load(&self) -> std::result::Result<Vec<Record>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::read(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::read(&self.path, e))
    }

    /// Replace the file with `records`.
    ///
    /// The collection is written to a uniquely named sibling and renamed over
    /// the target, so readers see either the old or the new file.
    async fn write_records(&self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| StorageError::write(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::write(&self.path, e))?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, &content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::write(&self.path, e).into());
        }
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::write(&self.path, e).into());
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self) -> Result<Vec<Record>> {
        let records = self.read_records().await?;
        debug!(count = records.len(), "Listed records");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(path = %self.path.display(), id = %record.id))]
    async fn create(&self, record: Record) -> Result<Record> {
        let mut records = self.read_records().await?;
        let stored = apply_create(&mut records, record, self.options.duplicates)?;
        self.write_records(&records).await?;
        debug!("Created record");
        Ok(stored)
    }

    #[instrument(skip(self, patch), fields(path = %self.path.display()))]
    async fn update(&self, id: &str, patch: RecordPatch) -> Result<Record> {
        let mut records = self.read_records().await?;
        let updated = apply_update(&mut records, id, &patch)?;
        self.write_records(&records).await?;
        debug!("Updated record");
        Ok(updated)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.read_records().await?;
        apply_delete(&mut records, id)?;
        self.write_records(&records).await?;
        debug!("Deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_file_is_a_hidden_sibling() {
        let store = FileRecordStore::new("/data/ordersStatusData.json");
        let temp = store.temp_path();
        assert_eq!(temp.parent(), Some(Path::new("/data")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".ordersStatusData.json."));
        assert!(name.ends_with(".tmp"));
        assert_ne!(store.temp_path(), temp);
    }

    #[test]
    fn default_options_mask_and_allow() {
        let store = FileRecordStore::new("records.json");
        assert_eq!(store.options().read_failures, ReadFailurePolicy::MaskAsEmpty);
        assert_eq!(store.options().duplicates, DuplicateIds::Allow);
    }
}
