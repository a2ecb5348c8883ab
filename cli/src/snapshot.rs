//! Snapshot source backed by a JSON file.
//!
//! The file holds the pool in ledger order:
//!
//! ```json
//! [
//!   { "address": "0x…", "stake": "5000000000000000000" },
//!   { "address": "0x…", "stake": "4000000000000000000" }
//! ]
//! ```

use pool_types::{PoolError, Snapshot, SnapshotSource, Transcoder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the pool ordering from a JSON file on every fetch.
pub struct FileSnapshotSource {
    path: PathBuf,
    capacity: Option<usize>,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, capacity: Option<usize>) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn fetch_snapshot(&self) -> Result<Snapshot, PoolError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| PoolError::Source(format!("{}: {e}", self.path.display())))?;
        let transcoders: Vec<Transcoder> = serde_json::from_str(&content)
            .map_err(|e| PoolError::Source(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), transcoders = transcoders.len(), "read pool snapshot");
        Snapshot::with_capacity(transcoders, self.capacity)
    }
}
