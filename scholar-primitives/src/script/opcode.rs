//! Script opcodes used by the Scholarship primitives.

/// Push an empty byte vector (the number zero).
pub const OP_0: u8 = 0x00;
/// Next byte is the push length.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Next two bytes (little-endian) are the push length.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Next four bytes (little-endian) are the push length.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the number -1.
pub const OP_1NEGATE: u8 = 0x4f;
/// Push the number 1. `OP_2`..`OP_16` follow contiguously.
pub const OP_1: u8 = 0x51;
/// Push the number 16.
pub const OP_16: u8 = 0x60;
/// Verify a signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Op0,
    Op1Negate,
    /// Small integer push, 1 through 16. Build it with [`Opcode::small_int`].
    OpN(u8),
    OpChecksig,
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Op0 => OP_0,
            Opcode::Op1Negate => OP_1NEGATE,
            Opcode::OpN(n) => {
                debug_assert!((1..=16).contains(n), "OpN out of range: {n}");
                OP_1 + (n - 1)
            }
            Opcode::OpChecksig => OP_CHECKSIG,
        }
    }

    /// Opcode that pushes `n` directly, for `n` in `-1` and `0..=16`.
    pub fn small_int(n: i64) -> Option<Self> {
        match n {
            -1 => Some(Opcode::Op1Negate),
            0 => Some(Opcode::Op0),
            1..=16 => Some(Opcode::OpN(n as u8)),
            _ => None,
        }
    }
}
