use crate::error::StorageResult;
use crate::models::Record;
use std::collections::BTreeMap;

/// The in-memory mapping from contact name to record.
pub type RecordMap = BTreeMap<String, Record>;

/// Whole-snapshot persistence for the address book.
///
/// Provides abstraction over where the snapshot lives,
/// enabling different implementations (file, in-memory mock).
pub trait SnapshotStore {
    /// Load the full mapping.
    ///
    /// Returns an empty mapping when nothing has been persisted yet.
    fn load(&self) -> StorageResult<RecordMap>;

    /// Replace the persisted snapshot with `records`.
    fn save(&self, records: &RecordMap) -> StorageResult<()>;
}
