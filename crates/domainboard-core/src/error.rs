//! Error types for domainboard.
//!
//! One error type covers the whole workspace, with explicit variants for
//! storage, lookup, transport, protocol and input validation failures.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for domainboard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing file could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// No record carries the requested id.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// A record with this id already exists.
    #[error("record already exists: {id}")]
    Conflict { id: String },

    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with an unexpected status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    pub fn conflict(id: impl Into<String>) -> Self {
        Error::Conflict { id: id.into() }
    }

    /// Returns true for the "id not present" failure of update and delete.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Protocol(e) => e.is_not_found(),
            _ => false,
        }
    }
}

/// Failures of the persisted collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File unreadable or not a JSON array of records.
    #[error("failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// Writing or replacing the file failed.
    #[error("failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl StorageError {
    pub fn read(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        StorageError::Read {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        StorageError::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error (body decoding, redirects, builder failures).
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the records API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Response body, if any.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The add form was submitted without a domain.
    #[error("domain must not be empty")]
    EmptyDomain,

    /// Invalid store URL.
    #[error("invalid store URL '{value}': {reason}")]
    StoreUrl { value: String, reason: String },

    /// A draft field was edited on a row that is not in edit mode.
    #[error("row {id} is not being edited")]
    NotEditing { id: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
