//! Consensus serialization.
//!
//! Integers are little-endian, lengths use the CompactSize encoding:
//!
//! ```text
//! value < 0xfd        -> 1 byte
//! value <= 0xffff     -> 0xfd + u16
//! value <= 0xffffffff -> 0xfe + u32
//! otherwise           -> 0xff + u64
//! ```

use crate::hash::Hash256;

/// Types with a canonical consensus byte encoding.
pub trait Encodable {
    /// Appends the consensus encoding of `self` to `buf`.
    fn consensus_encode(&self, buf: &mut Vec<u8>);
}

/// Serializes a value into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.consensus_encode(&mut buf);
    buf
}

/// Appends a CompactSize length prefix.
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn consensus_encode(&self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_int_encodable!(u8, u16, u32, u64, i32, i64);

impl Encodable for Hash256 {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }
}

/// Length-prefixed byte strings.
impl Encodable for [u8] {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        write_compact_size(buf, self.len() as u64);
        buf.extend_from_slice(self);
    }
}

/// Length-prefixed sequences.
impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        write_compact_size(buf, self.len() as u64);
        for item in self {
            item.consensus_encode(buf);
        }
    }
}
