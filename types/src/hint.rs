//! Position hints passed to the ledger alongside a pool update.

use serde::{Deserialize, Serialize};

use crate::TranscoderAddress;

/// The neighbours of one position in the pool.
///
/// `prev == None` means the position is the head; `next == None` means it is
/// the tail. A hint for a transcoder that is not in the pool has both fields
/// empty, which callers must not read as "only entry".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub prev: Option<TranscoderAddress>,
    pub next: Option<TranscoderAddress>,
}

impl Hint {
    pub const NONE: Self = Self {
        prev: None,
        next: None,
    };

    pub fn new(prev: Option<TranscoderAddress>, next: Option<TranscoderAddress>) -> Self {
        Self { prev, next }
    }
}

/// Hints for both legs of a stake move: the participant losing stake (`old`)
/// and the participant gaining it (`new`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHints {
    pub old: Hint,
    pub new: Hint,
}

impl MoveHints {
    pub fn old_prev(&self) -> Option<TranscoderAddress> {
        self.old.prev
    }

    pub fn old_next(&self) -> Option<TranscoderAddress> {
        self.old.next
    }

    pub fn new_prev(&self) -> Option<TranscoderAddress> {
        self.new.prev
    }

    pub fn new_next(&self) -> Option<TranscoderAddress> {
        self.new.next
    }
}
