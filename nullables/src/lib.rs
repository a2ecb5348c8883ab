//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators (the ledger the pool snapshot comes from) are
//! abstracted behind traits in `pool-types`. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network

pub mod snapshot;

pub use snapshot::NullSnapshotSource;
