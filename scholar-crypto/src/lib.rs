//! Cryptographic primitives for the Scholarship chain

pub mod hash;

pub use hash::{calculate_sha256, calculate_sha256d, scrypt_pow_hash, MerkleTree};
