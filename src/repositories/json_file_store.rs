use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::{RecordMap, SnapshotStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// On-disk layout of the snapshot.
#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    records: Vec<&'a Record>,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    records: Vec<Record>,
}

/// Snapshot store backed by a single JSON file.
///
/// A missing or blank file reads as an empty book. Records are written as
/// an array, so phone order survives the round trip, and every field is
/// re-validated when read back.
///
/// Saves write a temporary file next to the target and rename it into
/// place, so the target always holds a complete snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn write_atomically(&self, contents: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StorageResult<RecordMap> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(RecordMap::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(RecordMap::new());
        }

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        // Later entries win, matching insert semantics.
        let records: RecordMap = snapshot
            .records
            .into_iter()
            .map(|record| (record.name().as_str().to_string(), record))
            .collect();

        debug!(path = %self.path.display(), records = records.len(), "Loaded address book");
        Ok(records)
    }

    fn save(&self, records: &RecordMap) -> StorageResult<()> {
        let snapshot = SnapshotRef {
            records: records.values().collect(),
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(StorageError::Encode)?;

        self.write_atomically(json.as_bytes())
            .map_err(|source| self.write_error(source))?;

        debug!(path = %self.path.display(), records = records.len(), "Saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(name, birthday).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn map_of(records: Vec<Record>) -> RecordMap {
        records
            .into_iter()
            .map(|r| (r.name().as_str().to_string(), r))
            .collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        let records = map_of(vec![
            record("Alice", &["0679876543", "0501112233", "0679876543"], Some("1990-05-20")),
            record("Bob", &[], None),
        ]);

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_replaces_previous_snapshot_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let store = JsonFileStore::new(&path);

        let full = map_of(vec![
            record("Alice", &["0671234567"], Some("1990-05-20")),
            record("Bob", &["0501112233"], None),
        ]);
        store.save(&full).unwrap();

        let smaller = map_of(vec![record("Bob", &["0501112233"], None)]);
        store.save(&smaller).unwrap();

        assert_eq!(store.load().unwrap(), smaller);
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("book.json")]);
    }

    #[test]
    fn test_failed_save_keeps_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let store = JsonFileStore::new(&path);
        let original = map_of(vec![record("Alice", &["0671234567"], None)]);
        store.save(&original).unwrap();

        // A directory at the target path makes the final rename fail
        let blocked = JsonFileStore::new(dir.path().join("blocked"));
        fs::create_dir(blocked.path()).unwrap();
        fs::write(blocked.path().join("keep.txt"), "x").unwrap();
        let err = blocked.save(&original).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));

        assert_eq!(store.load().unwrap(), original);
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name != "book.json" && name != "blocked")
            .collect();
        assert!(leftovers.is_empty(), "temporary files left behind: {:?}", leftovers);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_field_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, r#"{"records":[{"name":"Alice","phones":["123"]}]}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope").join("book.json"));
        let err = store.save(&RecordMap::new()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
