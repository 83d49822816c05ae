//! Hashing algorithms for the Scholarship chain.

use scrypt::Params as ScryptParams;
use sha2::{Digest, Sha256};

/// log2 of the scrypt cost parameter (N = 1024).
const SCRYPT_LOG_N: u8 = 10;

/// scrypt block size parameter.
const SCRYPT_R: u32 = 1;

/// scrypt parallelisation parameter.
const SCRYPT_P: u32 = 1;

/// Length of every digest produced by this module.
pub const DIGEST_LEN: usize = 32;

/// Calculate SHA256 hash of input data
pub fn calculate_sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Calculate SHA256(SHA256(data)), the digest behind transaction ids,
/// Merkle nodes and modern block identities.
pub fn calculate_sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Computes the scrypt(N=1024, r=1, p=1) proof-of-work hash of a block header.
///
/// The header is used as both password and salt, producing a 32-byte digest.
/// Legacy (version <= 6) headers are identified by this hash.
pub fn scrypt_pow_hash(header_bytes: &[u8]) -> [u8; 32] {
    let params = ScryptParams::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, DIGEST_LEN)
        .expect("scrypt 1024/1/1 parameters are valid");
    let mut output = [0u8; DIGEST_LEN];
    scrypt::scrypt(header_bytes, header_bytes, &params, &mut output)
        .expect("output buffer matches the configured digest length");
    output
}

/// Represents a Merkle Tree over double-SHA256 leaves.
pub struct MerkleTree {
    nodes: Vec<[u8; 32]>,
}

impl MerkleTree {
    /// Constructs a Merkle Tree from already-hashed leaves (e.g. transaction ids).
    pub fn new(leaves: &[[u8; 32]]) -> Self {
        if leaves.is_empty() {
            return MerkleTree { nodes: Vec::new() };
        }

        let mut nodes = Vec::new();
        nodes.extend_from_slice(leaves);

        let mut current_level = leaves.to_vec();
        while current_level.len() > 1 {
            let next_level = Self::next_level(&current_level);
            nodes.extend_from_slice(&next_level);
            current_level = next_level;
        }

        MerkleTree { nodes }
    }

    /// Returns the Merkle root of the tree.
    pub fn root(&self) -> Option<[u8; 32]> {
        self.nodes.last().cloned()
    }

    /// Number of nodes stored, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Computes the Merkle root directly from a list of leaves without building the full tree.
    ///
    /// A single leaf is its own root. Returns `None` for an empty list.
    pub fn calculate_merkle_root(leaves: &[[u8; 32]]) -> Option<[u8; 32]> {
        if leaves.is_empty() {
            return None;
        }

        let mut current_level = leaves.to_vec();
        while current_level.len() > 1 {
            current_level = Self::next_level(&current_level);
        }

        current_level.first().cloned()
    }

    fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
        level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                // Duplicate last hash if odd number of nodes
                let right = pair.get(1).copied().unwrap_or(left);
                let mut concat = [0u8; 64];
                concat[..32].copy_from_slice(&left);
                concat[32..].copy_from_slice(&right);
                calculate_sha256d(&concat)
            })
            .collect()
    }
}
