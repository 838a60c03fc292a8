mod mock_snapshot_store;

pub use mock_snapshot_store::MockSnapshotStore;
