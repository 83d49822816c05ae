//! 256-bit hash values.
//!
//! Hashes are stored in internal byte order (the order the digest function
//! produced them and the order they appear on the wire) and rendered in the
//! reversed, big-endian order that block explorers and configuration
//! constants use.

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveError, Result};

/// A 32-byte hash output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// The null hash, used as the previous-block reference of a genesis block.
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wraps bytes that are already in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Builds a hash from bytes written in display (big-endian) order.
    ///
    /// Pairs with `hex_literal::hex!` to declare hash constants at compile time.
    pub const fn from_display_bytes(display: [u8; 32]) -> Self {
        let mut internal = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            internal[i] = display[31 - i];
            i += 1;
        }
        Hash256(internal)
    }

    /// Parses the display (big-endian) hex form, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        let display: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| PrimitiveError::InvalidLength { expected: 32, actual: bytes.len() })?;
        Ok(Self::from_display_bytes(display))
    }

    /// Hash of `data` under double SHA-256.
    pub fn sha256d(data: &[u8]) -> Self {
        Hash256(scholar_crypto::calculate_sha256d(data))
    }

    /// Returns the hash as a byte slice in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the bytes in display order.
    pub fn to_display_bytes(&self) -> [u8; 32] {
        let mut display = self.0;
        display.reverse();
        display
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interprets the hash as a 256-bit little-endian integer, the form used
    /// when comparing a block hash against a difficulty target.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self)
    }
}

impl FromStr for Hash256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self> {
        Hash256::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
