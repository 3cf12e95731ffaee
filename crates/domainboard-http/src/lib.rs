//! domainboard-http - record store backed by the orders-status REST API.
//!
//! [`HttpRecordStore`] implements [`domainboard_core::RecordStore`] by calling a
//! running domainboard server, so dashboard and CLI code works the same way
//! against a local file or a remote server.

mod store;

pub use store::HttpRecordStore;
