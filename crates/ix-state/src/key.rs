//! Configuration cache key
//!
//! A build's cacheable configuration is addressed by a 32-byte BLAKE3
//! digest. Identical cacheable inputs always derive the identical key, so
//! the key doubles as the file name of the persisted diagnostic report.

use serde::de::Error as _;
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Deterministic fingerprint of one build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Wrap raw digest bytes.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Underlying digest bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Abbreviated form for log lines (first 6 bytes, 12 hex chars).
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..6])
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CacheKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|rejected: Vec<u8>| KeyError::InvalidLength {
                actual: rejected.len(),
            })?;
        Ok(Self(arr))
    }
}

impl serde::Serialize for CacheKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CacheKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Errors parsing a textual cache key.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// Decoded byte count was not 32.
    #[error("invalid cache key length: expected 32 bytes, got {actual}")]
    InvalidLength {
        /// Decoded byte count.
        actual: usize,
    },

    /// Input was not valid hex.
    #[error("invalid cache key encoding: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
