//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Phone number '{0}' not found")]
    PhoneNotFound(String),
}

/// Errors raised by the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file exists but could not be read
    #[error("Failed to read address book from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be written
    #[error("Failed to write address book to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a valid snapshot
    #[error("Address book at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory snapshot could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[source] serde_json::Error),

    /// Generic storage error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors raised by address book operations.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// No record is stored under the given name
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Persisting or loading the store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for AddressBookError {
    fn from(err: ValidationError) -> Self {
        Self::Record(RecordError::InvalidValue(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
