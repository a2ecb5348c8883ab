//! Pool simulator: projects stake changes onto a private copy of the pool.
//!
//! Every mutation re-positions the touched entry with adjacent swaps, so the
//! result is the same as a stable re-sort by descending stake:
//! - a transcoder gaining stake moves ahead of strictly lighter neighbours and
//!   stays behind neighbours with equal stake;
//! - a transcoder losing stake moves behind strictly heavier neighbours and
//!   stays ahead of neighbours with equal stake.
//!
//! When the pool has a capacity and is full, a newcomer is admitted only if
//! it outweighs the tail, which is then evicted.

use pool_types::{Hint, MoveHints, Snapshot, Stake, Transcoder, TranscoderAddress};
use tracing::trace;

use crate::find_hints;

/// Working copy of the pool ordering.
#[derive(Clone, Debug, Default)]
pub struct PoolSimulator {
    transcoders: Vec<Transcoder>,
    capacity: Option<usize>,
}

impl PoolSimulator {
    /// Start from an ordering assumed to be sorted by descending stake.
    ///
    /// Entries past `capacity` are outside the pool and are dropped.
    pub fn new(mut transcoders: Vec<Transcoder>, capacity: Option<usize>) -> Self {
        if let Some(capacity) = capacity {
            if transcoders.len() > capacity {
                trace!(len = transcoders.len(), capacity, "truncating over-full pool");
                transcoders.truncate(capacity);
            }
        }
        Self {
            transcoders,
            capacity,
        }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::new(snapshot.transcoders().to_vec(), snapshot.capacity())
    }

    pub fn participants(&self) -> &[Transcoder] {
        &self.transcoders
    }

    pub fn into_transcoders(self) -> Vec<Transcoder> {
        self.transcoders
    }

    pub fn position(&self, address: &TranscoderAddress) -> Option<usize> {
        self.transcoders.iter().position(|t| t.address == *address)
    }

    pub fn stake_of(&self, address: &TranscoderAddress) -> Option<Stake> {
        self.position(address).map(|i| self.transcoders[i].stake)
    }

    pub fn hints(&self, address: &TranscoderAddress) -> Hint {
        find_hints(address, &self.transcoders)
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.transcoders.len() >= capacity)
    }

    /// Add `amount` to a transcoder, inserting it with that stake if absent.
    ///
    /// Returns the new position, or `None` if a full pool turned it away.
    pub fn increase_stake(&mut self, address: &TranscoderAddress, amount: Stake) -> Option<usize> {
        let Some(i) = self.position(address) else {
            return self.admit(Transcoder::new(*address, amount));
        };
        let entry = &mut self.transcoders[i];
        entry.stake = entry.stake.saturating_add(amount);
        let to = self.promote(i);
        trace!(%address, from = i, to, %amount, "stake increased");
        Some(to)
    }

    /// Remove `amount` from a transcoder, saturating at zero.
    ///
    /// A transcoder left with zero stake stays in the pool. Returns `None` if
    /// the transcoder is not in the pool.
    pub fn decrease_stake(&mut self, address: &TranscoderAddress, amount: Stake) -> Option<usize> {
        let i = self.position(address)?;
        let entry = &mut self.transcoders[i];
        entry.stake = entry.stake.saturating_sub(amount);
        let to = self.demote(i);
        trace!(%address, from = i, to, %amount, "stake decreased");
        Some(to)
    }

    /// Move `delta` stake and report hints for both legs.
    ///
    /// The receiver is `new`, or `old` when `new` is absent. Only when both
    /// are given and differ does `old` lose `delta` first; otherwise the old
    /// hints are empty.
    pub fn apply_move(
        &mut self,
        old: Option<&TranscoderAddress>,
        new: Option<&TranscoderAddress>,
        delta: Stake,
    ) -> MoveHints {
        let Some(receiver) = new.or(old) else {
            return MoveHints::default();
        };
        let donor = match (old, new) {
            (Some(old), Some(new)) if old != new => Some(old),
            _ => None,
        };

        if let Some(donor) = donor {
            self.decrease_stake(donor, delta);
        }
        self.increase_stake(receiver, delta);

        MoveHints {
            old: donor.map(|d| self.hints(d)).unwrap_or_default(),
            new: self.hints(receiver),
        }
    }

    fn admit(&mut self, entrant: Transcoder) -> Option<usize> {
        if self.is_full() {
            let outweighs_tail = self
                .transcoders
                .last()
                .is_some_and(|tail| entrant.stake > tail.stake);
            if !outweighs_tail {
                trace!(address = %entrant.address, stake = %entrant.stake, "pool full, entrant rejected");
                return None;
            }
            if let Some(evicted) = self.transcoders.pop() {
                trace!(address = %evicted.address, stake = %evicted.stake, "tail evicted");
            }
        }
        let address = entrant.address;
        self.transcoders.push(entrant);
        let to = self.promote(self.transcoders.len() - 1);
        trace!(%address, to, "transcoder inserted");
        Some(to)
    }

    fn promote(&mut self, mut i: usize) -> usize {
        while i > 0 && self.transcoders[i - 1].stake < self.transcoders[i].stake {
            self.transcoders.swap(i - 1, i);
            i -= 1;
        }
        i
    }

    fn demote(&mut self, mut i: usize) -> usize {
        while i + 1 < self.transcoders.len() && self.transcoders[i + 1].stake > self.transcoders[i].stake {
            self.transcoders.swap(i, i + 1);
            i += 1;
        }
        i
    }
}
