//! Address Book - a persistent personal contact store.
//!
//! Contacts are records holding a name, any number of phone numbers and an
//! optional birthday. The book keeps them keyed by name, writes the whole
//! collection to disk after every change and supports substring search and
//! birthday countdowns.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **repositories**: Whole-snapshot persistence behind `SnapshotStore`
//! - **store**: The `AddressBook` tying records to their snapshot store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use repositories::{JsonFileStore, RecordMap, SnapshotStore};
pub use store::AddressBook;
