use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

const HASH_LEN: usize = 32;

/// Content-addressed identifier for any stored object.
///
/// A `Hash` is the BLAKE3 digest of an object's encoded bytes. It is both the
/// storage key and the edge target inside trees: a tree entry points at its
/// child by hash. Equality is byte-wise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// Width of a hash in bytes, as written raw into tree records.
    pub const LEN: usize = HASH_LEN;

    /// The zero hash. Represents "no object".
    pub const ZERO: Hash = Hash([0u8; Hash::LEN]);

    /// Wrap a pre-computed digest.
    pub const fn from_bytes(bytes: [u8; Hash::LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a digest out of a slice that must be exactly [`Hash::LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; Hash::LEN] = bytes.try_into().map_err(|_| TypeError::InvalidLength {
            expected: Hash::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Returns `true` if this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; Hash::LEN]
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; Hash::LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.short_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; Hash::LEN]> for Hash {
    fn from(bytes: [u8; Hash::LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; Hash::LEN] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
