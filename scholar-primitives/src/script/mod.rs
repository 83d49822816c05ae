//! Scripts and a builder for assembling them.

pub mod opcode;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encode::Encodable;
use opcode::{Opcode, OP_PUSHDATA1};

/// A serialized script (locking or unlocking).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(Vec<u8>);

impl Script {
    /// The empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true for `<pubkey> OP_CHECKSIG` with a 33- or 65-byte key.
    pub fn is_pay_to_pubkey(&self) -> bool {
        match self.0.as_slice() {
            [len @ (33 | 65), body @ .., last] => {
                *last == opcode::OP_CHECKSIG && body.len() == *len as usize
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

impl Encodable for Script {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.0.as_slice().consensus_encode(buf);
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map(Script).map_err(serde::de::Error::custom)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
///
/// Zero encodes as the empty vector. When the most significant byte already
/// has its high bit set an extra byte carries the sign.
pub fn script_num_bytes(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // `out` is non-empty because value != 0
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

/// Incrementally assembles a [`Script`].
#[derive(Debug, Clone, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    pub fn new() -> Self {
        Builder(Vec::new())
    }

    pub fn push_opcode(mut self, op: Opcode) -> Self {
        self.0.push(op.to_u8());
        self
    }

    /// Pushes an integer, using the small-integer opcodes where one exists.
    pub fn push_int(self, n: i64) -> Self {
        match Opcode::small_int(n) {
            Some(op) => self.push_opcode(op),
            None => self.push_slice(&script_num_bytes(n)),
        }
    }

    /// Pushes the script-number encoding of `n` as data, never as an opcode.
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    /// Pushes raw data with the shortest push prefix for its length.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(opcode::OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(opcode::OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}
