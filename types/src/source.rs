//! Abstract source of pool snapshots.
//!
//! Whatever fetches the pool from the ledger (an RPC client, a file, an
//! in-memory fixture for testing) implements this trait. Hint computation
//! depends only on the trait.

use crate::{PoolError, Snapshot};

pub trait SnapshotSource {
    /// Fetch the current pool ordering.
    ///
    /// Implementations are responsible for returning a consistent
    /// point-in-time view; failures map to [`PoolError::Source`].
    fn fetch_snapshot(&self) -> Result<Snapshot, PoolError>;
}
