use address_book::error::{StorageError, StorageResult};
use address_book::{RecordMap, SnapshotStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock snapshot store for testing.
///
/// Keeps the snapshot in memory, tracks method calls for verification and
/// can be switched into a failing mode. Clones share state, so a test can
/// keep a handle while the address book owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotStore {
    snapshot: Arc<Mutex<Option<RecordMap>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSnapshotStore {
    /// Create a store with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: RecordMap) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = Some(records);
        store
    }

    /// The last snapshot written, if any.
    pub fn persisted(&self) -> Option<RecordMap> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make subsequent loads fail.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn load(&self) -> StorageResult<RecordMap> {
        self.track_call("load");

        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Other("simulated read failure".to_string()));
        }

        Ok(self.persisted().unwrap_or_default())
    }

    fn save(&self, records: &RecordMap) -> StorageResult<()> {
        self.track_call("save");

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Other("simulated write failure".to_string()));
        }

        *self.snapshot.lock().unwrap() = Some(records.clone());
        Ok(())
    }
}
