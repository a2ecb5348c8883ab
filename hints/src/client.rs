//! Hint client: fetches a pool snapshot and plans against it.

use pool_types::{Hint, PoolError, Snapshot, SnapshotSource, Stake, TranscoderAddress};
use tracing::{debug, warn};

use crate::{BondRequest, MoveOutcome, OperationPlanner};

/// Computes hints from whatever the snapshot source currently reports.
///
/// Each call fetches a fresh snapshot. A source failure is returned as is;
/// nothing is retried, since a stale hint is resolved by the ledger anyway.
pub struct HintClient<S> {
    source: S,
}

impl<S: SnapshotSource> HintClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn snapshot(&self) -> Result<Snapshot, PoolError> {
        let snapshot = self.source.fetch_snapshot().map_err(|e| {
            warn!(error = %e, "failed to fetch pool snapshot");
            e
        })?;
        debug!(
            transcoders = snapshot.len(),
            capacity = ?snapshot.capacity(),
            "fetched pool snapshot"
        );
        Ok(snapshot)
    }

    /// Current neighbours of `address`.
    pub fn position_hints(&self, address: &TranscoderAddress) -> Result<Hint, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(crate::find_hints(address, snapshot.transcoders()))
    }

    pub fn move_hints(
        &self,
        old: Option<&TranscoderAddress>,
        new: Option<&TranscoderAddress>,
        delta: Stake,
    ) -> Result<MoveOutcome, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(OperationPlanner::new(&snapshot).move_stake(old, new, delta))
    }

    pub fn bond_hints(&self, request: &BondRequest) -> Result<MoveOutcome, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(OperationPlanner::new(&snapshot).bond(request))
    }

    pub fn unbond_hints(&self, delegate: &TranscoderAddress, amount: Stake) -> Result<Hint, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(OperationPlanner::new(&snapshot).unbond(delegate, amount))
    }

    pub fn rebond_hints(&self, delegate: &TranscoderAddress, amount: Stake) -> Result<Hint, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(OperationPlanner::new(&snapshot).rebond(delegate, amount))
    }

    pub fn reward_hints(&self, transcoder: &TranscoderAddress, amount: Stake) -> Result<Hint, PoolError> {
        let snapshot = self.snapshot()?;
        Ok(OperationPlanner::new(&snapshot).reward(transcoder, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_nullables::NullSnapshotSource;
    use pool_types::Transcoder;

    fn addr(s: &str) -> TranscoderAddress {
        TranscoderAddress::from_hex(s).unwrap()
    }

    fn source() -> NullSnapshotSource {
        let transcoders = [("aaa", 5u128), ("bbb", 4), ("ccc", 3), ("ddd", 2), ("eee", 1)]
            .into_iter()
            .map(|(a, s)| Transcoder::new(addr(a), s))
            .collect();
        NullSnapshotSource::new(Snapshot::new(transcoders).unwrap())
    }

    #[test]
    fn position_hints_from_source() {
        let client = HintClient::new(source());
        let hint = client.position_hints(&addr("ccc")).unwrap();
        assert_eq!(hint, Hint::new(Some(addr("bbb")), Some(addr("ddd"))));
        assert_eq!(client.source().fetch_count(), 1);
    }

    #[test]
    fn each_call_fetches_a_fresh_snapshot() {
        let client = HintClient::new(source());
        let before = client.reward_hints(&addr("eee"), Stake::new(10)).unwrap();
        assert_eq!(before, Hint::new(None, Some(addr("aaa"))));

        client
            .source()
            .set_snapshot(Snapshot::new(vec![Transcoder::new(addr("fff"), 100u128)]).unwrap());
        let after = client.reward_hints(&addr("eee"), Stake::new(10)).unwrap();
        assert_eq!(after, Hint::new(Some(addr("fff")), None));
        assert_eq!(client.source().fetch_count(), 2);
    }

    #[test]
    fn move_hints_from_source() {
        let client = HintClient::new(source());
        let outcome = client
            .move_hints(Some(&addr("bbb")), Some(&addr("ccc")), Stake::new(1))
            .unwrap();
        assert_eq!(outcome.hints.old, Hint::new(Some(addr("ccc")), Some(addr("ddd"))));
        assert_eq!(outcome.hints.new, Hint::new(Some(addr("aaa")), Some(addr("bbb"))));
    }

    #[test]
    fn source_failure_is_propagated() {
        let source = source();
        source.fail_with("ledger unreachable");
        let client = HintClient::new(source);
        let err = client.unbond_hints(&addr("aaa"), Stake::new(1)).unwrap_err();
        assert!(matches!(err, PoolError::Source(msg) if msg == "ledger unreachable"));
    }

    #[test]
    fn bond_and_rebond_from_source() {
        let client = HintClient::new(source());
        let outcome = client
            .bond_hints(&BondRequest {
                delegate: None,
                bonded: Stake::ZERO,
                to: addr("ddd"),
                amount: Stake::new(2),
            })
            .unwrap();
        assert_eq!(outcome.hints.new, Hint::new(Some(addr("bbb")), Some(addr("ccc"))));

        let hint = client.rebond_hints(&addr("eee"), Stake::new(1)).unwrap();
        assert_eq!(hint, Hint::new(Some(addr("ddd")), None));
    }
}
