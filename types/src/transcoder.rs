//! Transcoder: a ranked entry in the pool.

use serde::{Deserialize, Serialize};

use crate::{Stake, TranscoderAddress};

/// A transcoder and the stake currently delegated to it.
///
/// The pool orders transcoders by `stake`, highest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcoder {
    pub address: TranscoderAddress,
    /// Total stake delegated to this transcoder.
    pub stake: Stake,
}

impl Transcoder {
    pub fn new(address: TranscoderAddress, stake: impl Into<Stake>) -> Self {
        Self {
            address,
            stake: stake.into(),
        }
    }
}
