//! The address book store.
//!
//! Composes the in-memory record mapping with a `SnapshotStore` so that
//! every mutation goes through a path that persists it.

pub mod address_book;

pub use address_book::AddressBook;
