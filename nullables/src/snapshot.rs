//! Nullable snapshot source: a pool snapshot held in memory.

use pool_types::{PoolError, Snapshot, SnapshotSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory snapshot source for testing.
///
/// Serves whatever snapshot it was last given, can be told to fail, and
/// counts how often it was asked.
pub struct NullSnapshotSource {
    snapshot: Mutex<Snapshot>,
    failure: Mutex<Option<String>>,
    fetches: AtomicUsize,
}

impl NullSnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            failure: Mutex::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replace the snapshot served by subsequent fetches.
    pub fn set_snapshot(&self, snapshot: Snapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    /// Make subsequent fetches fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Make subsequent fetches succeed again.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of fetches attempted so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for NullSnapshotSource {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl SnapshotSource for NullSnapshotSource {
    fn fetch_snapshot(&self) -> Result<Snapshot, PoolError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(PoolError::Source(message.clone()));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }
}
