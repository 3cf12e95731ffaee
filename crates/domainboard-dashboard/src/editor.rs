//! Per-row view/edit state.

use std::collections::HashMap;

use tracing::debug;

use domainboard_core::error::InvalidInputError;
use domainboard_core::{Error, Record, RecordPatch, RecordStore, Result};

use crate::cache::RecordCache;

/// What a row is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing {
        /// The values in the row's inputs.
        draft: Record,
        /// The row was added locally and has never been saved.
        is_new: bool,
    },
}

impl RowMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowMode::Editing { .. })
    }
}

/// Tracks which rows are being edited.
///
/// Rows not tracked here are [`RowMode::Viewing`]. Saving writes through a
/// [`RecordCache`] and only leaves edit mode once the store accepts the
/// change; a failed save keeps the row in edit mode with its draft.
#[derive(Debug, Default)]
pub struct RowEditor {
    rows: HashMap<String, RowMode>,
    // Insertion order of rows added with `add_row`.
    new_rows: Vec<String>,
}

impl RowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self, id: &str) -> RowMode {
        self.rows.get(id).cloned().unwrap_or(RowMode::Viewing)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    /// The current draft of an editing row.
    pub fn draft(&self, id: &str) -> Option<&Record> {
        match self.rows.get(id) {
            Some(RowMode::Editing { draft, .. }) => Some(draft),
            _ => None,
        }
    }

    /// Rows added locally and not yet saved, oldest first.
    pub fn pending_rows(&self) -> impl Iterator<Item = &Record> {
        self.new_rows.iter().filter_map(|id| self.draft(id))
    }

    /// Switch a cached row into edit mode. Already editing is a no-op.
    pub fn begin_edit<S: RecordStore>(&mut self, id: &str, cache: &RecordCache<S>) -> Result<()> {
        if self.is_editing(id) {
            return Ok(());
        }
        let record = cache.find(id).ok_or_else(|| Error::not_found(id))?;
        self.rows.insert(
            id.to_string(),
            RowMode::Editing {
                draft: record.clone(),
                is_new: false,
            },
        );
        debug!(id, "Editing row");
        Ok(())
    }

    /// Add an unsaved row, already in edit mode.
    pub fn add_row(&mut self, record: Record) {
        let id = record.id.clone();
        self.rows.insert(
            id.clone(),
            RowMode::Editing {
                draft: record,
                is_new: true,
            },
        );
        if !self.new_rows.contains(&id) {
            self.new_rows.push(id);
        }
    }

    pub fn set_domain(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        self.draft_mut(id)?.domain = value.into();
        Ok(())
    }

    pub fn set_ip(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        self.draft_mut(id)?.ip = value.into();
        Ok(())
    }

    pub fn set_date(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        self.draft_mut(id)?.date = value.into();
        Ok(())
    }

    /// Persist the row's draft and return it to view mode.
    ///
    /// New rows are created, existing rows are updated with the full draft.
    pub async fn save<S: RecordStore>(
        &mut self,
        id: &str,
        cache: &mut RecordCache<S>,
    ) -> Result<Record> {
        let (draft, is_new) = match self.rows.get(id) {
            Some(RowMode::Editing { draft, is_new }) => (draft.clone(), *is_new),
            _ => return Err(not_editing(id)),
        };

        let saved = if is_new {
            cache.create(draft).await?
        } else {
            cache.update(id, RecordPatch::from(draft)).await?
        };

        self.forget(id);
        debug!(id, is_new, "Row saved");
        Ok(saved)
    }

    /// Drop the row's draft. A new row is discarded altogether.
    pub fn cancel(&mut self, id: &str) {
        if let Some(RowMode::Editing { is_new, .. }) = self.rows.get(id) {
            debug!(id, is_new = *is_new, "Edit cancelled");
        }
        self.forget(id);
    }

    fn forget(&mut self, id: &str) {
        self.rows.remove(id);
        self.new_rows.retain(|n| n != id);
    }

    fn draft_mut(&mut self, id: &str) -> Result<&mut Record> {
        match self.rows.get_mut(id) {
            Some(RowMode::Editing { draft, .. }) => Ok(draft),
            _ => Err(not_editing(id)),
        }
    }
}

fn not_editing(id: &str) -> Error {
    Error::InvalidInput(InvalidInputError::NotEditing { id: id.to_string() })
}
