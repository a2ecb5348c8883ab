//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for pool snapshots and their sources.
///
/// The hint resolver itself never fails; these cover parsing, snapshot
/// validation and fetching.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("invalid transcoder address: {0}")]
    InvalidAddress(String),

    #[error("invalid stake amount: {0}")]
    InvalidStake(String),

    #[error("pool is not sorted by descending stake at index {index}")]
    Unsorted { index: usize },

    #[error("transcoder {0} appears more than once in the pool")]
    DuplicateTranscoder(String),

    #[error("pool holds {len} transcoders but capacity is {capacity}")]
    CapacityExceeded { capacity: usize, len: usize },

    #[error("snapshot source error: {0}")]
    Source(String),
}
