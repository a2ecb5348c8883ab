//! Validated point-in-time view of the transcoder pool.

use std::collections::HashSet;

use crate::{PoolError, Transcoder};

/// An owned pool ordering that has been checked against the pool invariants:
/// stake never increases from one entry to the next, addresses are unique,
/// and the pool does not exceed its capacity.
///
/// The hint resolver accepts plain slices and does not require a `Snapshot`;
/// this type is for callers that want the invariants checked up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    transcoders: Vec<Transcoder>,
    capacity: Option<usize>,
}

impl Snapshot {
    /// Validate an ordering with no capacity limit.
    pub fn new(transcoders: Vec<Transcoder>) -> Result<Self, PoolError> {
        Self::with_capacity(transcoders, None)
    }

    /// Validate an ordering against an optional maximum pool size.
    pub fn with_capacity(
        transcoders: Vec<Transcoder>,
        capacity: Option<usize>,
    ) -> Result<Self, PoolError> {
        if let Some(capacity) = capacity {
            if transcoders.len() > capacity {
                return Err(PoolError::CapacityExceeded {
                    capacity,
                    len: transcoders.len(),
                });
            }
        }

        if let Some(index) = transcoders
            .windows(2)
            .position(|pair| pair[0].stake < pair[1].stake)
        {
            return Err(PoolError::Unsorted { index: index + 1 });
        }

        let mut seen = HashSet::with_capacity(transcoders.len());
        for t in &transcoders {
            if !seen.insert(t.address) {
                return Err(PoolError::DuplicateTranscoder(t.address.to_string()));
            }
        }

        Ok(Self {
            transcoders,
            capacity,
        })
    }

    pub fn transcoders(&self) -> &[Transcoder] {
        &self.transcoders
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.transcoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcoders.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.transcoders.len() >= capacity)
    }
}
