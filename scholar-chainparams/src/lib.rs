//! Scholarship chain parameters
//!
//! One [`NetworkProfile`] per supported network, each binding its consensus
//! constants to a genesis block that is rebuilt and verified on construction,
//! and a [`ParameterRegistry`] that selects the network a process runs on.
//!
//! ```no_run
//! use scholar_chainparams::ParameterRegistry;
//!
//! let registry = ParameterRegistry::new();
//! let profile = registry.select_network("main")?;
//! println!("{} listens on {}", profile.network(), profile.default_port());
//! # Ok::<(), scholar_chainparams::ChainParamsError>(())
//! ```

#![forbid(unsafe_code)]

pub mod base58;
pub mod checkpoints;
pub mod consensus;
pub mod error;
pub mod genesis;
pub mod network;
pub mod profile;
pub mod regtest;
pub mod registry;
pub mod seeds;

pub use base58::{Base58Prefixes, Base58Type};
pub use checkpoints::CheckpointData;
pub use consensus::{Bip9Deployment, ConsensusParams, DeploymentPos, Deployments};
pub use error::{ChainParamsError, GenesisIntegrityError, Result};
pub use genesis::{
    create_coinbase_transaction, create_genesis_block, create_genesis_block_with, ExpectedGenesis,
    GenesisBlock, GenesisParams,
};
pub use network::Network;
pub use profile::{NetworkProfile, ProfileFlags};
pub use regtest::RegtestProfile;
pub use registry::ParameterRegistry;
pub use seeds::{DnsSeed, FixedSeed};
