//! Fundamental types for transcoder pool hints.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! transcoder addresses, stake amounts, pool entries, position hints, validated
//! snapshots, and the snapshot source seam.

pub mod address;
pub mod error;
pub mod hint;
pub mod snapshot;
pub mod source;
pub mod stake;
pub mod transcoder;

pub use address::TranscoderAddress;
pub use error::PoolError;
pub use hint::{Hint, MoveHints};
pub use snapshot::Snapshot;
pub use source::SnapshotSource;
pub use stake::Stake;
pub use transcoder::Transcoder;
