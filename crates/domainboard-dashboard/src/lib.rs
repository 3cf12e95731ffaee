//! domainboard-dashboard - state behind the records table.
//!
//! Rendering is left to the caller. This crate owns what the table needs
//! between renders:
//!
//! - [`DomainInput`] parses the add form,
//! - [`RecordCache`] keeps the client copy of the collection in step with a
//!   [`RecordStore`](domainboard_core::RecordStore),
//! - [`SearchQuery`] and [`Page`] produce the visible rows,
//! - [`RowEditor`] tracks which rows are being edited.

mod cache;
mod editor;
mod input;
mod search;

pub use cache::RecordCache;
pub use editor::{RowEditor, RowMode};
pub use input::DomainInput;
pub use search::{DEFAULT_PAGE_SIZE, Page, SearchQuery};
