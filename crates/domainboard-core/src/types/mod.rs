//! Core domainboard types.

mod record;
mod record_id;
mod store_url;

pub use record::{Record, RecordPatch, format_date};
pub use record_id::RecordId;
pub use store_url::StoreUrl;
