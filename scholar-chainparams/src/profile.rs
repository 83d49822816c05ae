//! Per-network parameter sets.

use hex_literal::hex;
use primitive_types::U256;
use serde::Serialize;

use scholar_primitives::Hash256;

use crate::base58::Base58Prefixes;
use crate::checkpoints::CheckpointData;
use crate::consensus::{Bip9Deployment, ConsensusParams, Deployments};
use crate::error::GenesisIntegrityError;
use crate::genesis::{create_genesis_block, ExpectedGenesis, GenesisBlock, GenesisParams};
use crate::network::Network;
use crate::seeds::{DnsSeed, FixedSeed, MAIN_DNS_SEEDS, MAIN_FIXED_SEEDS, TEST_FIXED_SEEDS};

/// Behavioural switches that differ between networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileFlags {
    pub requires_peers_for_mining: bool,
    pub runs_consistency_checks: bool,
    pub requires_standard_transactions: bool,
    pub allows_on_demand_mining: bool,
    pub marks_testnet_in_rpc: bool,
}

/// Everything a node needs to know about one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    network: Network,
    #[serde(serialize_with = "hex::serde::serialize")]
    message_start: [u8; 4],
    default_port: u16,
    prune_after_height: u64,
    consensus: ConsensusParams,
    genesis: GenesisBlock,
    checkpoints: CheckpointData,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<FixedSeed>,
    base58_prefixes: Base58Prefixes,
    cashaddr_prefix: &'static str,
    flags: ProfileFlags,
}

impl NetworkProfile {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes opening every P2P message.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn genesis(&self) -> &GenesisBlock {
        &self.genesis
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[FixedSeed] {
        &self.fixed_seeds
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Human-readable prefix of CashAddr-style addresses.
    pub fn cashaddr_prefix(&self) -> &str {
        self.cashaddr_prefix
    }

    pub fn flags(&self) -> &ProfileFlags {
        &self.flags
    }

    /// Builds the profile of `network`, verifying its genesis block.
    pub fn try_for(network: Network) -> Result<Self, GenesisIntegrityError> {
        match network {
            Network::Main => Self::try_main(),
            Network::Test => Self::try_test(),
            Network::Regtest => Self::try_regtest(),
        }
    }

    /// Builds the profile of `network`.
    ///
    /// # Panics
    ///
    /// Panics when the hard-coded genesis constants are inconsistent.
    pub fn for_network(network: Network) -> Self {
        Self::try_for(network).unwrap_or_else(|err| integrity_panic(err))
    }

    pub fn main() -> Self {
        Self::for_network(Network::Main)
    }

    pub fn test() -> Self {
        Self::for_network(Network::Test)
    }

    pub fn regtest() -> Self {
        Self::for_network(Network::Regtest)
    }

    /// Main network
    pub fn try_main() -> Result<Self, GenesisIntegrityError> {
        let genesis = create_genesis_block(&GenesisParams {
            time: 1_655_995_846,
            nonce: 222_052,
            bits: 0x1e0ffff0,
            version: 1,
            reward: 0,
        });
        let expected = ExpectedGenesis {
            hash: Hash256::from_display_bytes(hex!(
                "00000740c3ab3ef407b5667e039e3bb4d0f733a306e7b09b0bd28dd23948a5e3"
            )),
            merkle_root: Hash256::from_display_bytes(hex!(
                "b93661ffa5d22907d8f59ebe3400498e35f0461c6dc6ab97d21e5a2492000cea"
            )),
        };

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            max_reorganization_depth: 500,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34_height: None,
            bip34_hash: Hash256::ZERO,
            pow_limit: U256::MAX >> 20,
            pos_limit: U256::MAX >> 20,
            pos_limit_v2: U256::MAX >> 20,
            target_timespan: 10 * 60,
            target_spacing_v1: 3 * 60,
            target_spacing: 3 * 60,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            pos_no_retargeting: false,
            rule_change_activation_threshold: 5,
            miner_confirmation_window: 5,
            deployments: test_dummy_deployments(),
            protocol_v1_retargeting_fixed_time: 1_655_995_846,
            protocol_v2_time: 1_655_995_847,
            protocol_v3_time: 1_655_995_848,
            last_pow_block: 1_200_000,
            stake_timestamp_mask: 0xf,
            coinbase_maturity: 50,
            stake_min_age: 6 * 60 * 60,
            minimum_chain_work: U256::from(0x100001u64),
        };

        let checkpoints = CheckpointData::new([(0, expected.hash)], 1_655_995_846, 0, 0.0);

        Self {
            network: Network::Main,
            message_start: [0xb5, 0x3d, 0x80, 0x00],
            default_port: 55348,
            prune_after_height: 100_000,
            consensus,
            genesis,
            checkpoints,
            dns_seeds: MAIN_DNS_SEEDS.to_vec(),
            fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: [63],
                script_address: [28],
                secret_key: [52],
                ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
                ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
            },
            cashaddr_prefix: "Scholarship",
            flags: ProfileFlags {
                requires_peers_for_mining: true,
                runs_consistency_checks: false,
                requires_standard_transactions: true,
                allows_on_demand_mining: false,
                marks_testnet_in_rpc: false,
            },
        }
        .verified(&expected)
    }

    /// Public test network
    pub fn try_test() -> Result<Self, GenesisIntegrityError> {
        let genesis = create_genesis_block(&GenesisParams {
            time: 1_655_996_103,
            nonce: 1_322_056,
            bits: 0x1e0ffff0,
            version: 1,
            reward: 0,
        });
        let expected = ExpectedGenesis {
            hash: Hash256::from_display_bytes(hex!(
                "000006917e0cfbe8f8639b5b81040872c1f38670a52928b749b105793688456e"
            )),
            merkle_root: Hash256::from_display_bytes(hex!(
                "25d800a99a2d7374395f4175775276cdb4dc8b94d68c68297f050813fc1e73e1"
            )),
        };

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            max_reorganization_depth: 500,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            bip34_height: None,
            bip34_hash: Hash256::ZERO,
            pow_limit: U256::MAX >> 16,
            pos_limit: U256::MAX >> 20,
            pos_limit_v2: U256::MAX >> 20,
            target_timespan: 10 * 60,
            target_spacing_v1: 60,
            target_spacing: 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            pos_no_retargeting: false,
            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 5,
            deployments: test_dummy_deployments(),
            protocol_v1_retargeting_fixed_time: 1_655_996_103,
            protocol_v2_time: 1_655_996_104,
            protocol_v3_time: 1_655_996_105,
            last_pow_block: 100_000,
            stake_timestamp_mask: 0xf,
            coinbase_maturity: 10,
            stake_min_age: 8 * 60 * 60,
            minimum_chain_work: U256::from(0x100001u64),
        };

        let checkpoints = CheckpointData::new([(0, expected.hash)], 1_655_996_103, 0, 0.0);

        Self {
            network: Network::Test,
            message_start: [0x42, 0x56, 0xb1, 0x41],
            default_port: 35353,
            prune_after_height: 1000,
            consensus,
            genesis,
            checkpoints,
            dns_seeds: Vec::new(),
            fixed_seeds: TEST_FIXED_SEEDS.to_vec(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: [128],
                script_address: [65],
                secret_key: [111],
                ext_public_key: [0x04, 0x35, 0x87, 0xcf],
                ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            },
            cashaddr_prefix: "schotest",
            flags: ProfileFlags {
                requires_peers_for_mining: false,
                runs_consistency_checks: false,
                requires_standard_transactions: false,
                allows_on_demand_mining: false,
                marks_testnet_in_rpc: true,
            },
        }
        .verified(&expected)
    }

    /// Regression test network. Use [`RegtestProfile`](crate::RegtestProfile)
    /// when deployment windows need to change after construction.
    pub fn try_regtest() -> Result<Self, GenesisIntegrityError> {
        let genesis = create_genesis_block(&GenesisParams {
            time: 1_655_996_180,
            nonce: 2_963_963,
            bits: 0x1e0ffff0,
            version: 1,
            reward: 0,
        });
        let expected = ExpectedGenesis {
            hash: Hash256::from_display_bytes(hex!(
                "000000a5335ccb6d52d8ae350a006844c2a2f9377e63811a7c44484205c1c2c1"
            )),
            merkle_root: Hash256::from_display_bytes(hex!(
                "00ffc8b1cc829ada59b3dbde99248d87feb0cc0eb2516ae7c9bc0c33ce74e3b8"
            )),
        };

        let consensus = ConsensusParams {
            hash_genesis_block: genesis.hash(),
            max_reorganization_depth: 50,
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 100,
            bip34_height: None,
            bip34_hash: Hash256::ZERO,
            pow_limit: U256::MAX >> 16,
            pos_limit: U256::MAX >> 20,
            pos_limit_v2: U256::MAX >> 20,
            target_timespan: 10 * 60,
            target_spacing_v1: 2 * 64,
            target_spacing: 2 * 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            pos_no_retargeting: true,
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: test_dummy_deployments(),
            protocol_v1_retargeting_fixed_time: 1_655_996_180,
            protocol_v2_time: 1_655_996_181,
            protocol_v3_time: 1_655_996_182,
            last_pow_block: 250,
            stake_timestamp_mask: 0xf,
            coinbase_maturity: 3,
            stake_min_age: 60 * 60,
            minimum_chain_work: U256::zero(),
        };

        let checkpoints = CheckpointData::new([(0, expected.hash)], 1_655_996_180, 0, 0.0);

        Self {
            network: Network::Regtest,
            message_start: [0x3d, 0x80, 0xb5, 0x06],
            default_port: 45454,
            prune_after_height: 100_000,
            consensus,
            genesis,
            checkpoints,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: [122],
                script_address: [60],
                secret_key: [126],
                ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
                ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
            },
            cashaddr_prefix: "schoreg",
            flags: ProfileFlags {
                requires_peers_for_mining: false,
                runs_consistency_checks: true,
                requires_standard_transactions: false,
                allows_on_demand_mining: true,
                marks_testnet_in_rpc: false,
            },
        }
        .verified(&expected)
    }

    fn verified(self, expected: &ExpectedGenesis) -> Result<Self, GenesisIntegrityError> {
        self.genesis
            .verify(self.network, expected, self.consensus.pow_limit)?;

        let genesis_hash = self.genesis.hash();
        match self.checkpoints.get(0) {
            Some(hash) if *hash == genesis_hash => Ok(self),
            found => Err(GenesisIntegrityError::CheckpointMismatch {
                network: self.network,
                found: found.copied(),
                genesis: genesis_hash,
            }),
        }
    }

    pub(crate) fn deployments_mut(&mut self) -> &mut Deployments {
        &mut self.consensus.deployments
    }
}

/// Aborts on a genesis integrity failure. Such a failure means the binary was
/// built with inconsistent constants and must not run.
pub(crate) fn integrity_panic(err: GenesisIntegrityError) -> ! {
    log::error!("Chain parameter integrity failure: {}", err);
    panic!("chain parameter integrity failure: {err}")
}

fn test_dummy_deployments() -> Deployments {
    Deployments::new([Bip9Deployment::new(28, 1_199_145_601, 1_230_767_999)])
}
