//! Data models for the address book.
//!
//! A `Record` is the aggregate stored in the book: a name, its phone
//! numbers and an optional birthday.

pub mod record;

pub use record::Record;
