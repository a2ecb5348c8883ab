//! Delegated stake amounts.
//!
//! Stake is a 256-bit unsigned integer of base token units, the same width the
//! ledger stores bonded stake in. Any total the ledger can hold is represented
//! exactly. Sums that would pass `2^256 - 1` are ones the ledger itself rejects,
//! so the saturating helpers only clamp amounts that can never be bonded.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::PoolError;

/// Delegated stake, the weight a transcoder is ranked by.
///
/// Serialized as a decimal string so the full 256-bit range survives JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Stake(U256);

impl Stake {
    pub const ZERO: Self = Self(U256([0; 4]));
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    pub fn new(raw: u128) -> Self {
        Self(U256::from(raw))
    }

    pub fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Stake {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl From<u128> for Stake {
    fn from(raw: u128) -> Self {
        Self::new(raw)
    }
}

impl From<U256> for Stake {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl FromStr for Stake {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() {
            return Err(PoolError::InvalidStake(format!("{s:?}: empty amount")));
        }
        U256::from_dec_str(digits)
            .map(Self)
            .map_err(|e| PoolError::InvalidStake(format!("{s}: {e:?}")))
    }
}

impl TryFrom<String> for Stake {
    type Error = PoolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Stake> for String {
    fn from(stake: Stake) -> Self {
        stake.0.to_string()
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
