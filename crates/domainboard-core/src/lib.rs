//! domainboard-core - Core record types and traits.

pub mod error;
pub mod store;
pub mod types;

pub use error::Error;
pub use store::{DuplicateIds, MemoryRecordStore, ReadFailurePolicy, RecordStore};
pub use types::{Record, RecordId, RecordPatch, StoreUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
