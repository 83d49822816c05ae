//! Blocks and block headers.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use scholar_crypto::{scrypt_pow_hash, MerkleTree};

use crate::encode::{serialize, Encodable};
use crate::hash::Hash256;
use crate::transaction::Transaction;

/// Headers at or above this version are identified by double SHA-256;
/// older headers by their scrypt proof-of-work hash.
pub const SHA256D_HEADER_VERSION: i32 = 7;

/// Size of a serialized block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// A difficulty target in compact ("nBits") form: one exponent byte and a
/// three-byte mantissa whose high bit is a sign flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactTarget(pub u32);

impl CompactTarget {
    /// Expands to the full 256-bit target.
    ///
    /// Returns `None` for negative or overflowing encodings, which never
    /// describe a valid target.
    pub fn to_target(self) -> Option<U256> {
        let bits = self.0;
        let size = bits >> 24;
        let mut word = bits & 0x007f_ffff;

        let target = if size <= 3 {
            word >>= 8 * (3 - size);
            U256::from(word)
        } else {
            let shift = 8 * (size - 3);
            if shift >= 256 {
                return if word == 0 { Some(U256::zero()) } else { None };
            }
            U256::from(word) << shift
        };

        let negative = word != 0 && (bits & 0x0080_0000) != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
        if negative || overflow {
            None
        } else {
            Some(target)
        }
    }

    /// Compresses a 256-bit target into compact form, rounding down.
    pub fn from_target(target: U256) -> Self {
        let mut size = (target.bits() as u32 + 7) / 8;
        let mut compact = if size <= 3 {
            (target.low_u64() << (8 * (3 - size))) as u32
        } else {
            (target >> (8 * (size - 3))).low_u64() as u32
        };

        // Keep the sign bit clear by moving one byte into the exponent.
        if compact & 0x0080_0000 != 0 {
            compact >>= 8;
            size += 1;
        }
        CompactTarget(compact | (size << 24))
    }
}

/// A block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    /// Block timestamp (seconds since the Unix epoch).
    pub time: u32,
    /// Difficulty target in compact form.
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// The 80-byte header serialization.
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(self)
    }

    /// The block identity hash.
    pub fn hash(&self) -> Hash256 {
        if self.version >= SHA256D_HEADER_VERSION {
            Hash256::sha256d(&self.to_bytes())
        } else {
            self.pow_hash()
        }
    }

    /// The scrypt proof-of-work hash of the header.
    pub fn pow_hash(&self) -> Hash256 {
        Hash256::from_bytes(scrypt_pow_hash(&self.to_bytes()))
    }

    /// Target encoded by `bits`, if the encoding is valid.
    pub fn target(&self) -> Option<U256> {
        CompactTarget(self.bits).to_target()
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.version.consensus_encode(buf);
        self.prev_block_hash.consensus_encode(buf);
        self.merkle_root.consensus_encode(buf);
        self.time.consensus_encode(buf);
        self.bits.consensus_encode(buf);
        self.nonce.consensus_encode(buf);
    }
}

/// A block: header, transactions and the block signature of staked blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    /// Signature by the staker; empty for proof-of-work blocks.
    #[serde(with = "hex::serde")]
    pub signature: Vec<u8>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root over the transaction ids, or the null hash for an empty block.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<[u8; 32]> = self
            .transactions
            .iter()
            .map(|tx| *tx.txid().as_bytes())
            .collect();
        MerkleTree::calculate_merkle_root(&txids)
            .map(Hash256::from_bytes)
            .unwrap_or(Hash256::ZERO)
    }

    /// Full block serialization.
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize(self)
    }
}

impl Encodable for Block {
    fn consensus_encode(&self, buf: &mut Vec<u8>) {
        self.header.consensus_encode(buf);
        self.transactions.consensus_encode(buf);
        self.signature.as_slice().consensus_encode(buf);
    }
}
