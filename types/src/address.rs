//! Transcoder address type, a 20-byte ledger account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PoolError;

/// A 20-byte transcoder address.
///
/// Rendered as `0x`-prefixed lowercase hex. The all-zero address is an
/// ordinary value here: list boundaries are expressed with `Option`, never
/// with a reserved address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TranscoderAddress([u8; 20]);

impl TranscoderAddress {
    /// Address length in bytes.
    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse a hex address, with or without the `0x` prefix.
    ///
    /// Short input is left-padded with zeros, so `"aaa"` parses to
    /// `0x0000…0aaa`. More than 40 hex digits is rejected.
    pub fn from_hex(s: &str) -> Result<Self, PoolError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > Self::LEN * 2 {
            return Err(PoolError::InvalidAddress(s.to_string()));
        }
        let padded = format!("{:0>40}", digits);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| PoolError::InvalidAddress(format!("{s}: {e}")))?;
        Ok(Self(bytes))
    }

    /// Full `0x`-prefixed hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TranscoderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TranscoderAddress({})", self.to_hex())
    }
}

impl fmt::Display for TranscoderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for TranscoderAddress {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for TranscoderAddress {
    type Error = PoolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<TranscoderAddress> for String {
    fn from(addr: TranscoderAddress) -> Self {
        addr.to_hex()
    }
}

impl From<[u8; 20]> for TranscoderAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}
