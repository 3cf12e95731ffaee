use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use domainboard_core::{DuplicateIds, ReadFailurePolicy};
use domainboard_file::FileStoreOptions;

/// Default port of the API.
pub const DEFAULT_PORT: u16 = 5000;

/// Default name of the backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "ordersStatusData.json";

/// Everything `serve` needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_file: PathBuf,
    pub read_failures: ReadFailurePolicy,
    pub duplicates: DuplicateIds,
}

impl ServerConfig {
    pub fn file_options(&self) -> FileStoreOptions {
        FileStoreOptions {
            read_failures: self.read_failures,
            duplicates: self.duplicates,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            read_failures: ReadFailurePolicy::default(),
            duplicates: DuplicateIds::default(),
        }
    }
}
