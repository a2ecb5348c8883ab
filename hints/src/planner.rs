//! Hint planning for the staking operations that reorder the pool.
//!
//! Each plan runs the operation's stake changes through a [`PoolSimulator`]
//! seeded from a snapshot and reads the hints from the projected ordering.
//! Nothing here builds or submits a transaction.

use pool_types::{Hint, MoveHints, Snapshot, Stake, TranscoderAddress};
use tracing::debug;

use crate::{MoveOutcome, PoolSimulator};

/// A bond of `amount` new stake to `to`.
///
/// When the delegator is currently bonded to a different transcoder, its
/// existing `bonded` stake leaves that transcoder and follows it to `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BondRequest {
    /// Transcoder the delegator is bonded to today, if any.
    pub delegate: Option<TranscoderAddress>,
    /// Stake the delegator already has bonded.
    pub bonded: Stake,
    pub to: TranscoderAddress,
    pub amount: Stake,
}

/// Plans hints against one snapshot.
///
/// Every call starts from the snapshot as given; plans do not accumulate.
pub struct OperationPlanner<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> OperationPlanner<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    fn simulator(&self) -> PoolSimulator {
        PoolSimulator::from_snapshot(self.snapshot)
    }

    /// Move `delta` stake from `old` to `new`, honouring the pool capacity.
    ///
    /// Same semantics as [`find_move_hints`](crate::find_move_hints).
    pub fn move_stake(
        &self,
        old: Option<&TranscoderAddress>,
        new: Option<&TranscoderAddress>,
        delta: Stake,
    ) -> MoveOutcome {
        let mut sim = self.simulator();
        let hints = sim.apply_move(old, new, delta);
        debug!(?old, ?new, %delta, ?hints, "planned move");
        MoveOutcome {
            hints,
            projected: sim.into_transcoders(),
        }
    }

    /// Hints for a bond. `hints.old` covers the transcoder being left behind
    /// when the delegator switches; it is empty otherwise.
    pub fn bond(&self, request: &BondRequest) -> MoveOutcome {
        let mut sim = self.simulator();
        let switching = request.delegate.filter(|current| *current != request.to);

        let old = match switching {
            Some(current) => {
                sim.decrease_stake(&current, request.bonded);
                sim.increase_stake(&request.to, request.bonded.saturating_add(request.amount));
                sim.hints(&current)
            }
            None => {
                sim.increase_stake(&request.to, request.amount);
                Hint::NONE
            }
        };
        let hints = MoveHints {
            old,
            new: sim.hints(&request.to),
        };

        debug!(
            to = %request.to,
            from = ?switching,
            amount = %request.amount,
            ?hints,
            "planned bond"
        );
        MoveOutcome {
            hints,
            projected: sim.into_transcoders(),
        }
    }

    /// Hint for `delegate` after `amount` is unbonded from it.
    pub fn unbond(&self, delegate: &TranscoderAddress, amount: Stake) -> Hint {
        let mut sim = self.simulator();
        sim.decrease_stake(delegate, amount);
        let hint = sim.hints(delegate);
        debug!(%delegate, %amount, ?hint, "planned unbond");
        hint
    }

    /// Hint for `delegate` after `amount` of unbonding stake returns to it.
    pub fn rebond(&self, delegate: &TranscoderAddress, amount: Stake) -> Hint {
        let mut sim = self.simulator();
        sim.increase_stake(delegate, amount);
        let hint = sim.hints(delegate);
        debug!(%delegate, %amount, ?hint, "planned rebond");
        hint
    }

    /// Hint for `transcoder` after a round reward of `amount` is added.
    pub fn reward(&self, transcoder: &TranscoderAddress, amount: Stake) -> Hint {
        let mut sim = self.simulator();
        sim.increase_stake(transcoder, amount);
        let hint = sim.hints(transcoder);
        debug!(%transcoder, %amount, ?hint, "planned reward");
        hint
    }
}
