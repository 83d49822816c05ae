//! Error types for the parameter registry.

use primitive_types::U256;
use scholar_primitives::Hash256;
use thiserror::Error;

use crate::network::Network;

/// Errors a caller can recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    /// The name is not one of `main`, `test` or `regtest`
    #[error("Unknown chain {0}")]
    UnknownNetwork(String),

    /// A different network was already selected for this registry
    #[error("Network {active} already selected, cannot switch to {requested}")]
    AlreadySelected { active: Network, requested: Network },
}

/// A hard-coded network constant disagrees with what it commits to.
///
/// This is a build or configuration defect, never a runtime condition. The
/// plain profile and registry constructors abort the process when they
/// encounter one; the `try_` variants hand it back so a front end can report
/// it before exiting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisIntegrityError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch {
        network: Network,
        expected: Hash256,
        computed: Hash256,
    },

    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: Network,
        expected: Hash256,
        computed: Hash256,
    },

    #[error("{network} genesis bits {bits:#010x} do not encode a valid target")]
    InvalidBits { network: Network, bits: u32 },

    #[error("{network} genesis target {target:#x} exceeds the proof-of-work limit {limit:#x}")]
    TargetAboveLimit {
        network: Network,
        target: U256,
        limit: U256,
    },

    #[error("{network} genesis hash {hash} does not meet its own target")]
    InsufficientWork { network: Network, hash: Hash256 },

    #[error("{network} checkpoint at height 0 is {found:?}, genesis is {genesis}")]
    CheckpointMismatch {
        network: Network,
        found: Option<Hash256>,
        genesis: Hash256,
    },
}

/// A specialized `Result` type for registry operations.
pub type Result<T> = std::result::Result<T, ChainParamsError>;
