//! The persistent address book.

use crate::error::{AddressBookError, AddressBookResult, RecordResult, StorageResult};
use crate::models::Record;
use crate::repositories::{JsonFileStore, RecordMap, SnapshotStore};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{debug, error, info};

/// A keyed collection of records that persists itself after every change.
///
/// The mapping is loaded once on construction. `add_record`, `delete` and
/// `update_record` write the whole mapping back through the store before
/// returning. If that write fails the in-memory change is kept and the
/// error is returned, so memory and disk disagree until the next
/// successful save.
///
/// # Example
///
/// ```no_run
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::open("address_book.json")?;
/// let mut alice = Record::new("Alice", Some("1990-05-20"))?;
/// alice.add_phone("0671234567")?;
/// book.add_record(alice)?;
///
/// assert_eq!(book.search("067").len(), 1);
/// # Ok::<(), address_book::AddressBookError>(())
/// ```
#[derive(Debug)]
pub struct AddressBook<S: SnapshotStore = JsonFileStore> {
    store: S,
    records: RecordMap,
}

impl AddressBook<JsonFileStore> {
    /// Open the address book stored in the JSON file at `path`.
    ///
    /// A missing file yields an empty book; the file is created on the
    /// first mutation.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::with_store(JsonFileStore::new(path.as_ref()))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: SnapshotStore> AddressBook<S> {
    /// Build a book over `store`, loading its current snapshot.
    pub fn with_store(store: S) -> StorageResult<Self> {
        let records = store.load()?;
        info!(records = records.len(), "Address book loaded");
        Ok(Self { store, records })
    }

    /// Re-read the snapshot from the store, discarding in-memory state.
    pub fn load(&mut self) -> StorageResult<()> {
        self.records = self.store.load()?;
        debug!(records = self.records.len(), "Address book reloaded");
        Ok(())
    }

    /// Write the whole mapping to the store.
    pub fn save(&self) -> StorageResult<()> {
        self.store.save(&self.records).map_err(|e| {
            error!(error = %e, "Failed to persist address book");
            e
        })
    }

    /// Insert `record`, replacing any record with the same name, then persist.
    pub fn add_record(&mut self, record: Record) -> StorageResult<()> {
        let name = record.name().as_str().to_string();
        let replaced = self.records.insert(name.clone(), record).is_some();
        info!(name = %name, replaced, "Record added");
        self.save()
    }

    /// Remove the record stored under `name`, if any, then persist.
    ///
    /// Returns the removed record. Deleting an absent name is not an error
    /// and still persists.
    pub fn delete(&mut self, name: &str) -> StorageResult<Option<Record>> {
        let removed = self.records.remove(name);
        info!(name = %name, removed = removed.is_some(), "Record deleted");
        self.save()?;
        Ok(removed)
    }

    /// Apply `f` to the record stored under `name`, then persist.
    ///
    /// Nothing is persisted when `f` fails; record operations leave the
    /// record untouched on error.
    pub fn update_record<T, F>(&mut self, name: &str, f: F) -> AddressBookResult<T>
    where
        F: FnOnce(&mut Record) -> RecordResult<T>,
    {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))?;
        let output = f(record)?;
        debug!(name = %name, "Record updated");
        self.save()?;
        Ok(output)
    }

    /// Records whose name or any phone contains `query`, ignoring case.
    ///
    /// Results follow the book's iteration order (by name). An empty
    /// query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        let results: Vec<&Record> = self
            .records
            .values()
            .filter(|record| record.matches_lowercase(&needle))
            .collect();
        debug!(query = %query, result_count = results.len(), "Search completed");
        results
    }

    /// Records with a birthday within the next `within_days` days (inclusive),
    /// soonest first, ties by name.
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<(&Record, i64)> {
        self.upcoming_birthdays_from(Local::now().date_naive(), within_days)
    }

    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        within_days: i64,
    ) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_next_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        // Stable sort keeps name order among equal day counts.
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in iteration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// The underlying snapshot store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
