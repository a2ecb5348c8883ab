//! Position hints for a stake-ordered transcoder pool.
//!
//! The ledger keeps transcoders in a list sorted by delegated stake, highest
//! first. Inserting or moving an entry is cheap when the caller supplies the
//! entry's future neighbours, so this crate computes them from a snapshot:
//!
//! - [`resolver`]: single-position and move hints over a borrowed slice.
//! - [`simulator`]: the working-copy engine that projects stake changes.
//! - [`planner`]: hints for bond, unbond, rebond and reward operations.
//! - [`client`]: fetches a snapshot from a [`SnapshotSource`] and plans against it.
//!
//! Hints are advisory. The ledger validates them and remains the source of
//! truth for the ordering.
//!
//! [`SnapshotSource`]: pool_types::SnapshotSource

pub mod client;
pub mod planner;
pub mod resolver;
pub mod simulator;

pub use client::HintClient;
pub use planner::{BondRequest, OperationPlanner};
pub use resolver::{find_hints, find_move_hints, MoveOutcome};
pub use simulator::PoolSimulator;
