//! Hint resolution over a borrowed pool ordering.
//!
//! Both resolvers are total over any input. An unsorted or duplicated pool
//! produces meaningless hints, never a panic.

use pool_types::{Hint, MoveHints, Stake, Transcoder, TranscoderAddress};
use serde::Serialize;

use crate::PoolSimulator;

/// Result of a move: the hints for both legs and the ordering the pool will
/// have once the ledger applies the move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub hints: MoveHints,
    pub projected: Vec<Transcoder>,
}

/// Neighbours of `target` in `transcoders`.
///
/// Scans linearly and uses the first entry with a matching address. When the
/// target is absent both sides are `None`; this is not insertion-aware, use
/// [`find_move_hints`] with `old = None` to place a newcomer.
pub fn find_hints(target: &TranscoderAddress, transcoders: &[Transcoder]) -> Hint {
    match transcoders.iter().position(|t| t.address == *target) {
        Some(i) => Hint {
            prev: i.checked_sub(1).map(|p| transcoders[p].address),
            next: transcoders.get(i + 1).map(|t| t.address),
        },
        None => Hint::NONE,
    }
}

/// Hints for moving `delta` stake onto a participant.
///
/// The participant gaining stake is `new`, or `old` when `new` is `None`. When
/// both are present and differ, `old` first loses `delta` (the vacated leg),
/// then `new` gains it. Both hint pairs are read from the projected ordering,
/// since the ledger applies the two legs together.
///
/// `transcoders` is not modified. The post-move ordering is returned in
/// [`MoveOutcome::projected`].
pub fn find_move_hints(
    old: Option<&TranscoderAddress>,
    new: Option<&TranscoderAddress>,
    delta: Stake,
    transcoders: &[Transcoder],
) -> MoveOutcome {
    let mut sim = PoolSimulator::new(transcoders.to_vec(), None);
    let hints = sim.apply_move(old, new, delta);
    MoveOutcome {
        hints,
        projected: sim.into_transcoders(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> TranscoderAddress {
        TranscoderAddress::from_hex(s).unwrap()
    }

    /// aaa > bbb > ccc > ddd > eee with stakes 5, 4, 3, 2, 1.
    fn pool() -> Vec<Transcoder> {
        [("aaa", 5), ("bbb", 4), ("ccc", 3), ("ddd", 2), ("eee", 1)]
            .into_iter()
            .map(|(a, s)| Transcoder::new(addr(a), s))
            .collect()
    }

    fn order(transcoders: &[Transcoder]) -> Vec<TranscoderAddress> {
        transcoders.iter().map(|t| t.address).collect()
    }

    #[test]
    fn head_has_no_prev() {
        let hint = find_hints(&addr("aaa"), &pool());
        assert_eq!(hint.prev, None);
        assert_eq!(hint.next, Some(addr("bbb")));
    }

    #[test]
    fn tail_has_no_next() {
        let hint = find_hints(&addr("eee"), &pool());
        assert_eq!(hint.prev, Some(addr("ddd")));
        assert_eq!(hint.next, None);
    }

    #[test]
    fn middle_has_both_neighbours() {
        let hint = find_hints(&addr("ccc"), &pool());
        assert_eq!(hint.prev, Some(addr("bbb")));
        assert_eq!(hint.next, Some(addr("ddd")));
    }

    #[test]
    fn absent_target_has_no_neighbours() {
        assert_eq!(find_hints(&addr("fff"), &pool()), Hint::NONE);
        assert_eq!(find_hints(&addr("aaa"), &[]), Hint::NONE);
    }

    #[test]
    fn single_entry_pool() {
        let pool = vec![Transcoder::new(addr("aaa"), 1)];
        assert_eq!(find_hints(&addr("aaa"), &pool), Hint::NONE);
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let mut pool = pool();
        pool.push(Transcoder::new(addr("aaa"), 0));
        let hint = find_hints(&addr("aaa"), &pool);
        assert_eq!(hint, Hint::new(None, Some(addr("bbb"))));
    }

    #[test]
    fn find_hints_is_repeatable() {
        let pool = pool();
        let first = find_hints(&addr("ccc"), &pool);
        let second = find_hints(&addr("ccc"), &pool);
        assert_eq!(first, second);
    }

    #[test]
    fn move_between_participants_reports_both_legs() {
        let outcome = find_move_hints(Some(&addr("bbb")), Some(&addr("ccc")), Stake::new(1), &pool());
        assert_eq!(outcome.hints.old_prev(), Some(addr("ccc")));
        assert_eq!(outcome.hints.old_next(), Some(addr("ddd")));
        assert_eq!(outcome.hints.new_prev(), Some(addr("aaa")));
        assert_eq!(outcome.hints.new_next(), Some(addr("bbb")));
        assert_eq!(
            order(&outcome.projected),
            vec![addr("aaa"), addr("ccc"), addr("bbb"), addr("ddd"), addr("eee")]
        );
    }

    #[test]
    fn old_only_promotes_old_to_head() {
        let outcome = find_move_hints(Some(&addr("ddd")), None, Stake::new(10), &pool());
        assert_eq!(outcome.hints.old, Hint::NONE);
        assert_eq!(outcome.hints.new_prev(), None);
        assert_eq!(outcome.hints.new_next(), Some(addr("aaa")));
        assert_eq!(outcome.projected[0].stake, Stake::new(12));
    }

    #[test]
    fn self_move_has_no_old_leg() {
        let outcome = find_move_hints(Some(&addr("ccc")), Some(&addr("ccc")), Stake::new(2), &pool());
        assert_eq!(outcome.hints.old, Hint::NONE);
        // ccc reaches 5 and ties aaa, so it stays behind it.
        assert_eq!(outcome.hints.new, Hint::new(Some(addr("aaa")), Some(addr("bbb"))));
    }

    #[test]
    fn new_only_updates_existing_entry() {
        let outcome = find_move_hints(None, Some(&addr("eee")), Stake::new(2), &pool());
        assert_eq!(outcome.hints.old, Hint::NONE);
        assert_eq!(outcome.hints.new, Hint::new(Some(addr("ccc")), Some(addr("ddd"))));
    }

    #[test]
    fn zero_delta_keeps_neighbours() {
        let before = pool();
        let outcome = find_move_hints(Some(&addr("bbb")), Some(&addr("ddd")), Stake::ZERO, &before);
        assert_eq!(outcome.projected, before);
        assert_eq!(outcome.hints.new, find_hints(&addr("ddd"), &before));
        assert_eq!(outcome.hints.old, find_hints(&addr("bbb"), &before));
    }

    #[test]
    fn zero_delta_on_tail_stays_tail() {
        let outcome = find_move_hints(None, Some(&addr("eee")), Stake::ZERO, &pool());
        assert_eq!(outcome.hints.new_next(), None);
        assert_eq!(outcome.hints.new_prev(), Some(addr("ddd")));
    }

    #[test]
    fn newcomer_is_inserted_by_weight() {
        let outcome = find_move_hints(None, Some(&addr("fff")), Stake::new(3), &pool());
        // Equal stake goes behind the existing ccc.
        assert_eq!(outcome.hints.new, Hint::new(Some(addr("ccc")), Some(addr("ddd"))));
        assert_eq!(outcome.projected.len(), 6);
    }

    #[test]
    fn newcomer_into_empty_pool_is_alone() {
        let outcome = find_move_hints(None, Some(&addr("aaa")), Stake::new(1), &[]);
        assert_eq!(outcome.hints.new, Hint::NONE);
        assert_eq!(order(&outcome.projected), vec![addr("aaa")]);
    }

    #[test]
    fn no_participants_is_a_noop() {
        let before = pool();
        let outcome = find_move_hints(None, None, Stake::new(100), &before);
        assert_eq!(outcome.hints, MoveHints::default());
        assert_eq!(outcome.projected, before);
    }

    #[test]
    fn absent_old_leg_is_ignored() {
        let outcome = find_move_hints(Some(&addr("fff")), Some(&addr("eee")), Stake::new(10), &pool());
        assert_eq!(outcome.hints.old, Hint::NONE);
        assert_eq!(outcome.hints.new, Hint::new(None, Some(addr("aaa"))));
    }

    #[test]
    fn caller_slice_is_untouched() {
        let before = pool();
        let copy = before.clone();
        let _ = find_move_hints(Some(&addr("eee")), None, Stake::new(100), &before);
        assert_eq!(before, copy);
    }

    #[test]
    fn move_near_u128_limit_keeps_strict_order() {
        let pool = vec![
            Transcoder::new(addr("aaa"), u128::MAX),
            Transcoder::new(addr("bbb"), u128::MAX - 1),
        ];
        let outcome = find_move_hints(None, Some(&addr("bbb")), Stake::new(10), &pool);
        assert_eq!(outcome.hints.new, Hint::new(None, Some(addr("aaa"))));
        assert_eq!(outcome.projected[0].stake, Stake::new(u128::MAX) + Stake::new(9));
    }

    #[test]
    fn unsorted_input_does_not_panic() {
        let mut pool = pool();
        pool.reverse();
        pool.push(Transcoder::new(addr("ccc"), u128::MAX));
        let _ = find_hints(&addr("ccc"), &pool);
        let _ = find_move_hints(Some(&addr("ccc")), Some(&addr("aaa")), Stake::new(u128::MAX), &pool);
    }
}
